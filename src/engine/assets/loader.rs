// Asset loading functionality

use super::AssetError;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Supported asset kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    Sound,
}

impl AssetKind {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Sound => "sound",
        }
    }

    /// Get the default directory for this asset kind
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetKind::Texture => "textures",
            AssetKind::Sound => "sounds",
        }
    }

    /// Get supported file extensions for this asset kind
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Texture => &["png", "jpg", "jpeg"],
            AssetKind::Sound => &["ogg", "wav"],
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw RGBA8 pixels produced by a decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, buffer: Vec<u8>) -> Self {
        Self {
            width,
            height,
            buffer,
        }
    }

    /// Number of bytes a tightly packed RGBA8 buffer of this size holds
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Capability to turn named asset files into data the native layer accepts
pub trait ResourceProvider {
    /// Decode an image file into RGBA8 pixels
    fn decode_image(&self, filename: &str) -> Result<DecodedImage, AssetError>;

    /// Read the encoded bytes of a sound file
    fn read_sound(&self, filename: &str) -> Result<Vec<u8>, AssetError>;
}

/// Asset loader reading asset files from a directory tree
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, kind: AssetKind, name: &str) -> PathBuf {
        self.base_path.join(kind.default_directory()).join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, kind: AssetKind, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(kind, name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        debug!("Reading {} from {}", kind, path.display());
        Ok(std::fs::read(&path)?)
    }

    /// Check if an asset exists
    pub fn exists(&self, kind: AssetKind, name: &str) -> bool {
        self.resolve_path(kind, name).exists()
    }

    /// List all assets of a given kind
    pub fn list_assets(&self, kind: AssetKind) -> Result<Vec<String>, AssetError> {
        let dir = self.base_path.join(kind.default_directory());

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        let extensions = kind.extensions();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if extensions.contains(&ext.to_string_lossy().as_ref()) {
                        if let Some(name) = path.file_name() {
                            assets.push(name.to_string_lossy().to_string());
                        }
                    }
                }
            }
        }

        assets.sort();
        Ok(assets)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl ResourceProvider for AssetLoader {
    fn decode_image(&self, filename: &str) -> Result<DecodedImage, AssetError> {
        let bytes = self.load_bytes(AssetKind::Texture, filename)?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::Decode(format!("{}: {}", filename, e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(DecodedImage::new(width, height, rgba.into_raw()))
    }

    fn read_sound(&self, filename: &str) -> Result<Vec<u8>, AssetError> {
        self.load_bytes(AssetKind::Sound, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let textures = dir.join("textures");
        std::fs::create_dir_all(&textures).unwrap();
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 128]));
        img.save(textures.join(name)).unwrap();
    }

    #[test]
    fn test_asset_kind_directories() {
        assert_eq!(AssetKind::Texture.default_directory(), "textures");
        assert_eq!(AssetKind::Sound.default_directory(), "sounds");
    }

    #[test]
    fn test_asset_kind_extensions() {
        assert!(AssetKind::Texture.extensions().contains(&"png"));
        assert!(AssetKind::Sound.extensions().contains(&"ogg"));
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path(AssetKind::Texture, "panel.png");

        assert_eq!(path, PathBuf::from("/game/assets/textures/panel.png"));
    }

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "app.png", 4, 2);

        let loader = AssetLoader::new(dir.path());
        let image = loader.decode_image("app.png").unwrap();

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert_eq!(image.buffer.len(), image.expected_len());
        assert_eq!(&image.buffer[..4], &[10, 20, 30, 128]);
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());

        let result = loader.decode_image("app.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_decode_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let textures = dir.path().join("textures");
        std::fs::create_dir_all(&textures).unwrap();
        std::fs::write(textures.join("app.png"), b"not a png").unwrap();

        let loader = AssetLoader::new(dir.path());
        let result = loader.decode_image("app.png");
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_read_sound() {
        let dir = tempfile::tempdir().unwrap();
        let sounds = dir.path().join("sounds");
        std::fs::create_dir_all(&sounds).unwrap();
        std::fs::write(sounds.join("shot.ogg"), b"OggS").unwrap();

        let loader = AssetLoader::new(dir.path());
        assert_eq!(loader.read_sound("shot.ogg").unwrap(), b"OggS".to_vec());
        assert!(loader.exists(AssetKind::Sound, "shot.ogg"));
        assert!(!loader.exists(AssetKind::Sound, "missing.ogg"));
    }

    #[test]
    fn test_list_assets_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "panel.png", 1, 1);
        write_png(dir.path(), "app.png", 1, 1);
        std::fs::write(dir.path().join("textures").join("notes.txt"), b"x").unwrap();

        let loader = AssetLoader::new(dir.path());
        let textures = loader.list_assets(AssetKind::Texture).unwrap();

        assert_eq!(textures, vec!["app.png".to_string(), "panel.png".to_string()]);
        assert!(loader.list_assets(AssetKind::Sound).unwrap().is_empty());
    }
}
