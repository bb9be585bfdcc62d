// Registered game assets

use super::handle::{SoundId, TextureId};

/// Recipe for loading one texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    pub id: TextureId,
    pub filename: &'static str,
    /// Passed through to the upload layer to select the pixel format
    pub use_alpha: bool,
}

/// Recipe for loading one sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundDescriptor {
    pub id: SoundId,
    pub filename: &'static str,
}

const BUILTIN_TEXTURES: &[TextureDescriptor] = &[
    TextureDescriptor {
        id: TextureId::APP,
        filename: "app.png",
        use_alpha: false,
    },
    TextureDescriptor {
        id: TextureId::PANEL,
        filename: "panel.png",
        use_alpha: true,
    },
];

// No sound ships with the game yet.
const BUILTIN_SOUNDS: &[SoundDescriptor] = &[];

/// Enumerable table mapping resource IDs to their load recipes
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    textures: Vec<TextureDescriptor>,
    sounds: Vec<SoundDescriptor>,
}

impl AssetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the assets shipped with the game
    pub fn builtin() -> Self {
        Self {
            textures: BUILTIN_TEXTURES.to_vec(),
            sounds: BUILTIN_SOUNDS.to_vec(),
        }
    }

    /// Register a texture, replacing any previous entry with the same ID
    pub fn with_texture(mut self, descriptor: TextureDescriptor) -> Self {
        self.textures.retain(|t| t.id != descriptor.id);
        self.textures.push(descriptor);
        self
    }

    /// Register a sound, replacing any previous entry with the same ID
    pub fn with_sound(mut self, descriptor: SoundDescriptor) -> Self {
        self.sounds.retain(|s| s.id != descriptor.id);
        self.sounds.push(descriptor);
        self
    }

    /// Look up a texture recipe
    pub fn texture(&self, id: TextureId) -> Option<&TextureDescriptor> {
        self.textures.iter().find(|t| t.id == id)
    }

    /// Look up a sound recipe
    pub fn sound(&self, id: SoundId) -> Option<&SoundDescriptor> {
        self.sounds.iter().find(|s| s.id == id)
    }

    /// All registered textures
    pub fn textures(&self) -> &[TextureDescriptor] {
        &self.textures
    }

    /// All registered sounds
    pub fn sounds(&self) -> &[SoundDescriptor] {
        &self.sounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_textures() {
        let registry = AssetRegistry::builtin();

        let app = registry.texture(TextureId::APP).unwrap();
        assert_eq!(app.filename, "app.png");
        assert!(!app.use_alpha);

        let panel = registry.texture(TextureId::PANEL).unwrap();
        assert_eq!(panel.filename, "panel.png");
        assert!(panel.use_alpha);

        assert_eq!(registry.textures().len(), 2);
    }

    #[test]
    fn test_font_is_not_registered() {
        let registry = AssetRegistry::builtin();
        assert!(registry.texture(TextureId::FONT).is_none());
    }

    #[test]
    fn test_builtin_has_no_sounds() {
        let registry = AssetRegistry::builtin();
        assert!(registry.sounds().is_empty());
        assert!(registry.sound(SoundId(2)).is_none());
    }

    #[test]
    fn test_namespaces_are_independent() {
        let registry = AssetRegistry::builtin().with_sound(SoundDescriptor {
            id: SoundId(2),
            filename: "shot.ogg",
        });

        // Same number, different namespaces
        assert_eq!(registry.texture(TextureId(2)).unwrap().filename, "app.png");
        assert_eq!(registry.sound(SoundId(2)).unwrap().filename, "shot.ogg");
    }

    #[test]
    fn test_with_texture_replaces() {
        let registry = AssetRegistry::builtin().with_texture(TextureDescriptor {
            id: TextureId::APP,
            filename: "app_hd.png",
            use_alpha: true,
        });

        assert_eq!(registry.textures().len(), 2);
        assert_eq!(registry.texture(TextureId::APP).unwrap().filename, "app_hd.png");
    }
}
