// Dispatch of resource IDs to their decode and upload recipes

use super::diagnostics::{Diagnostics, LogDiagnostics};
use super::handle::{SoundId, TextureHandle, TextureId};
use super::loader::{AssetKind, DecodedImage, ResourceProvider};
use super::registry::AssetRegistry;
use super::AssetError;
use log::debug;

/// Tag attached to every asset diagnostic
pub const DIAGNOSTIC_TAG: &str = "EngData";

/// Native layer receiving decoded textures
pub trait NativeUpload {
    /// Upload pixels for `id`, returning [`TextureHandle::NONE`] on failure
    fn upload_texture(&mut self, id: TextureId, image: DecodedImage, use_alpha: bool)
        -> TextureHandle;
}

/// Native layer receiving encoded sounds
pub trait NativeAudio {
    fn load_sound(&mut self, id: SoundId, data: Vec<u8>) -> Result<(), AssetError>;
}

/// Resolves resource IDs to native resources
///
/// Every call is independent: nothing is cached, a repeated ID is decoded and
/// uploaded again. The `try_*` methods report failures as [`AssetError`]; the
/// `resolve_*` methods never fail, they log one diagnostic and degrade to
/// "not loaded" instead.
pub struct AssetDispatcher<D = LogDiagnostics> {
    registry: AssetRegistry,
    diagnostics: D,
}

impl AssetDispatcher<LogDiagnostics> {
    /// Create a dispatcher logging through the `log` facade
    pub fn new(registry: AssetRegistry) -> Self {
        Self::with_diagnostics(registry, LogDiagnostics)
    }
}

impl<D: Diagnostics> AssetDispatcher<D> {
    /// Create a dispatcher with a custom diagnostics sink
    pub fn with_diagnostics(registry: AssetRegistry, diagnostics: D) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    /// Get the registry
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Get the diagnostics sink
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Decode and upload the texture registered under `id`
    pub fn try_resolve_texture<P, U>(
        &self,
        id: TextureId,
        provider: &P,
        uploader: &mut U,
    ) -> Result<TextureHandle, AssetError>
    where
        P: ResourceProvider + ?Sized,
        U: NativeUpload + ?Sized,
    {
        let descriptor = self
            .registry
            .texture(id)
            .ok_or(AssetError::UnknownResource {
                kind: AssetKind::Texture,
                id: id.as_u16(),
            })?;

        let image = provider.decode_image(descriptor.filename)?;
        debug!(
            "Uploading texture {} ({}x{}, alpha: {})",
            id, image.width, image.height, descriptor.use_alpha
        );

        let handle = uploader.upload_texture(id, image, descriptor.use_alpha);
        if !handle.is_loaded() {
            return Err(AssetError::UploadFailed(id));
        }

        Ok(handle)
    }

    /// Fail-soft variant of [`Self::try_resolve_texture`]
    ///
    /// Returns [`TextureHandle::NONE`] on any failure.
    pub fn resolve_texture<P, U>(&self, id: TextureId, provider: &P, uploader: &mut U) -> TextureHandle
    where
        P: ResourceProvider + ?Sized,
        U: NativeUpload + ?Sized,
    {
        match self.try_resolve_texture(id, provider, uploader) {
            Ok(handle) => handle,
            Err(err) => {
                self.report(AssetKind::Texture, id.as_u16(), &err);
                TextureHandle::NONE
            }
        }
    }

    /// Read and hand over the sound registered under `id`
    pub fn try_resolve_sound<P, A>(
        &self,
        id: SoundId,
        provider: &P,
        audio: &mut A,
    ) -> Result<(), AssetError>
    where
        P: ResourceProvider + ?Sized,
        A: NativeAudio + ?Sized,
    {
        let descriptor = self
            .registry
            .sound(id)
            .ok_or(AssetError::UnknownResource {
                kind: AssetKind::Sound,
                id: id.as_u16(),
            })?;

        let data = provider.read_sound(descriptor.filename)?;
        debug!("Loading sound {} ({} bytes)", id, data.len());

        audio.load_sound(id, data)
    }

    /// Fail-soft variant of [`Self::try_resolve_sound`], returns whether the sound loaded
    pub fn resolve_sound<P, A>(&self, id: SoundId, provider: &P, audio: &mut A) -> bool
    where
        P: ResourceProvider + ?Sized,
        A: NativeAudio + ?Sized,
    {
        match self.try_resolve_sound(id, provider, audio) {
            Ok(()) => true,
            Err(err) => {
                self.report(AssetKind::Sound, id.as_u16(), &err);
                false
            }
        }
    }

    /// Resolve every registered texture, in registration order
    pub fn resolve_all_textures<P, U>(
        &self,
        provider: &P,
        uploader: &mut U,
    ) -> Vec<(TextureId, TextureHandle)>
    where
        P: ResourceProvider + ?Sized,
        U: NativeUpload + ?Sized,
    {
        self.registry
            .textures()
            .iter()
            .map(|t| (t.id, self.resolve_texture(t.id, provider, uploader)))
            .collect()
    }

    /// Resolve every registered sound, returning the IDs that loaded
    pub fn resolve_all_sounds<P, A>(&self, provider: &P, audio: &mut A) -> Vec<SoundId>
    where
        P: ResourceProvider + ?Sized,
        A: NativeAudio + ?Sized,
    {
        self.registry
            .sounds()
            .iter()
            .filter(|s| self.resolve_sound(s.id, provider, audio))
            .map(|s| s.id)
            .collect()
    }

    fn report(&self, kind: AssetKind, id: u16, err: &AssetError) {
        let message = match err {
            AssetError::UnknownResource { .. } => err.to_string(),
            _ => format!("Failed to load {} ID {}: {}", kind, id, err),
        };
        self.diagnostics.log_error(DIAGNOSTIC_TAG, &message);
    }
}
