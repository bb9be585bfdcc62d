use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use bullet_time::engine::assets::{AssetDispatcher, AssetLoader, AssetRegistry};
use bullet_time::engine::audio::SoundBank;
use bullet_time::engine::renderer::{GpuContext, TextureManager};
use bullet_time::game::social;
use bullet_time::AppConfig;

const DEFAULT_ASSET_DIR: &str = "assets";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Usage: bullet-time [CONFIG.toml] [ASSET_DIR]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => AppConfig::load_from_file(Path::new(&path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => AppConfig::default(),
    };
    let asset_dir = args.next().unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string());

    info!(
        "Starting {} (language {:?})...",
        config.library_name, config.language
    );
    info!(
        "Declared permissions: {}",
        config.permissions.android_permissions().join(", ")
    );
    info!("Facebook fields: {}", social::fields_query(&config.social));
    if config.advertising.test_mode {
        warn!("Advertising test mode is on");
    }

    let gpu = GpuContext::headless_blocking()?;
    info!("Uploading textures on {}", gpu.adapter_name());

    let loader = AssetLoader::new(&asset_dir);
    let dispatcher = AssetDispatcher::new(AssetRegistry::builtin());

    let mut textures = TextureManager::new(gpu);
    for (id, handle) in dispatcher.resolve_all_textures(&loader, &mut textures) {
        match textures.get(handle) {
            Some(texture) => info!(
                "Texture {} loaded in slot {} ({}x{})",
                id,
                handle.as_u32(),
                texture.width,
                texture.height
            ),
            None => warn!("Texture {} not loaded", id),
        }
    }

    let mut sounds = SoundBank::new();
    let loaded = dispatcher.resolve_all_sounds(&loader, &mut sounds);

    info!(
        "Loaded {} texture(s) and {} of {} sound(s) from {}",
        textures.texture_count(),
        loaded.len(),
        dispatcher.registry().sounds().len(),
        asset_dir
    );

    Ok(())
}
