// Asset management system
//
// Resolves symbolic texture and sound IDs to decoded data and hands it to the
// native layer. Failures degrade to "not loaded" instead of aborting the game.

mod diagnostics;
mod dispatcher;
mod handle;
mod loader;
mod registry;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use dispatcher::{AssetDispatcher, NativeAudio, NativeUpload, DIAGNOSTIC_TAG};
pub use handle::{SoundId, TextureHandle, TextureId};
pub use loader::{AssetKind, AssetLoader, DecodedImage, ResourceProvider};
pub use registry::{AssetRegistry, SoundDescriptor, TextureDescriptor};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Unknown {kind} ID: {id}")]
    UnknownResource { kind: AssetKind, id: u16 },

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode asset: {0}")]
    Decode(String),

    #[error("Native layer rejected texture ID: {0}")]
    UploadFailed(TextureId),

    #[error("Invalid pixel buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("Unsupported texture size {width}x{height} (limit {max})")]
    UnsupportedSize { width: u32, height: u32, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
