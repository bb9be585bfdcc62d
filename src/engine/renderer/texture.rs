// GPU texture upload for decoded game assets

use crate::engine::assets::{AssetError, DecodedImage, NativeUpload, TextureHandle, TextureId};
use log::{debug, warn};
use std::collections::HashMap;

use super::GpuContext;

/// A loaded texture with GPU resources
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Create a texture from tightly packed RGBA8 pixels
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }
}

/// Validate a decoded image and convert it to the pixels sent to the GPU
///
/// Images uploaded without alpha are made fully opaque.
pub fn prepare_pixels(image: DecodedImage, use_alpha: bool) -> Result<Vec<u8>, AssetError> {
    let expected = image.expected_len();
    if expected == 0 || image.buffer.len() != expected {
        return Err(AssetError::InvalidBuffer {
            expected,
            actual: image.buffer.len(),
        });
    }

    let mut pixels = image.buffer;
    if !use_alpha {
        for pixel in pixels.chunks_exact_mut(4) {
            pixel[3] = u8::MAX;
        }
    }

    Ok(pixels)
}

/// Reject sizes the device cannot hold
pub fn check_dimensions(width: u32, height: u32, max_dimension: u32) -> Result<(), AssetError> {
    if width == 0 || height == 0 || width > max_dimension || height > max_dimension {
        return Err(AssetError::UnsupportedSize {
            width,
            height,
            max: max_dimension,
        });
    }
    Ok(())
}

/// Owns uploaded textures, one slot per texture ID
pub struct TextureManager {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: Vec<Texture>,
    slots: HashMap<TextureId, TextureHandle>,
}

impl TextureManager {
    /// Create a new texture manager on the given GPU
    pub fn new(context: GpuContext) -> Self {
        Self {
            device: context.device,
            queue: context.queue,
            textures: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.as_u32() as usize)
    }

    /// Get the handle currently bound to a texture ID
    pub fn handle_for(&self, id: TextureId) -> Option<TextureHandle> {
        self.slots.get(&id).copied()
    }

    /// Get the number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Largest width or height a texture may have on this device
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }
}

impl NativeUpload for TextureManager {
    fn upload_texture(
        &mut self,
        id: TextureId,
        image: DecodedImage,
        use_alpha: bool,
    ) -> TextureHandle {
        let (width, height) = (image.width, image.height);
        let pixels = match check_dimensions(width, height, self.max_texture_dimension())
            .and_then(|()| prepare_pixels(image, use_alpha))
        {
            Ok(pixels) => pixels,
            Err(e) => {
                warn!("Rejected texture {}: {}", id, e);
                return TextureHandle::NONE;
            }
        };

        // Validation errors would otherwise reach the uncaptured error handler and panic
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let label = format!("texture-{}", id);
        let texture = Texture::from_rgba(
            &self.device,
            &self.queue,
            &pixels,
            width,
            height,
            Some(&label),
        );
        if let Some(e) = pollster::block_on(self.device.pop_error_scope()) {
            warn!("GPU rejected texture {}: {}", id, e);
            return TextureHandle::NONE;
        }

        // Re-uploading an ID replaces its texture in place
        if let Some(&handle) = self.slots.get(&id) {
            self.textures[handle.as_u32() as usize] = texture;
            debug!("Replaced texture {} in slot {}", id, handle.as_u32());
            return handle;
        }

        let handle = TextureHandle::from_raw(self.textures.len() as u32);
        self.textures.push(texture);
        self.slots.insert(id, handle);
        debug!("Uploaded texture {} to slot {}", id, handle.as_u32());

        handle
    }
}
