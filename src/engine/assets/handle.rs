// Resource identifiers and native handles

use std::fmt;

/// Identifier of a game texture
///
/// Texture IDs and sound IDs live in separate namespaces: the same number may
/// name a texture and a sound without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u16);

impl TextureId {
    /// Font atlas, loaded by the engine itself and never by the game registry
    pub const FONT: TextureId = TextureId(1);
    /// Application logo
    pub const APP: TextureId = TextureId(2);
    /// Control panel
    pub const PANEL: TextureId = TextureId(3);

    /// Get the raw value
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a game sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundId(pub u16);

impl SoundId {
    /// Get the raw value
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a texture owned by the native upload layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u32);

impl TextureHandle {
    /// Sentinel meaning "no texture loaded"
    pub const NONE: TextureHandle = TextureHandle(u32::MAX);

    /// Create a handle from a raw slot index
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether this handle refers to a loaded texture
    pub fn is_loaded(&self) -> bool {
        *self != Self::NONE
    }
}
