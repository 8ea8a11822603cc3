//! 2D textures with an attached sampler.

use crate::error::VantageError;

/// Creation parameters for a [`Texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureOptions {
    /// Texel format.
    pub format: wgpu::TextureFormat,
    /// Min and mag filter.
    pub filter: wgpu::FilterMode,
    /// Address mode for both the u and v axes.
    pub wrap: wgpu::AddressMode,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            format: wgpu::TextureFormat::Rgba32Float,
            filter: wgpu::FilterMode::Nearest,
            wrap: wgpu::AddressMode::Repeat,
        }
    }
}

/// Bytes of initial data a `width` × `height` texture of `format` expects.
///
/// # Errors
///
/// Returns [`VantageError::InvalidTexture`] for a zero dimension or a
/// block-compressed / multi-aspect format.
pub fn expected_data_len(
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> Result<usize, VantageError> {
    if width == 0 || height == 0 {
        return Err(VantageError::InvalidTexture(format!(
            "zero-sized texture {width}x{height}"
        )));
    }
    if format.block_dimensions() != (1, 1) {
        return Err(VantageError::InvalidTexture(format!(
            "{format:?} is block-compressed"
        )));
    }
    let texel = format.block_copy_size(None).ok_or_else(|| {
        VantageError::InvalidTexture(format!("{format:?} has no single copy aspect"))
    })?;
    Ok(texel as usize * width as usize * height as usize)
}

/// Usage flags for a texture of `format`: sampling and copies always,
/// plus render attachment when the format supports it.
///
/// # Errors
///
/// Returns [`VantageError::InvalidTexture`] if the format cannot be
/// sampled and written, or if `render_target` is set and the format cannot
/// be rendered to.
pub fn texture_usages(
    format: wgpu::TextureFormat,
    features: wgpu::Features,
    render_target: bool,
) -> Result<wgpu::TextureUsages, VantageError> {
    let allowed = format.guaranteed_format_features(features).allowed_usages;
    let required = wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST;
    if !allowed.contains(required) {
        return Err(VantageError::InvalidTexture(format!(
            "{format:?} cannot be sampled and uploaded"
        )));
    }
    if render_target && !allowed.contains(wgpu::TextureUsages::RENDER_ATTACHMENT) {
        return Err(VantageError::InvalidTexture(format!(
            "{format:?} cannot be a render target"
        )));
    }
    let wanted = required
        | wgpu::TextureUsages::COPY_SRC
        | wgpu::TextureUsages::RENDER_ATTACHMENT;
    Ok(wanted & allowed)
}

/// Reject sizes past the device's 2D texture limit.
///
/// # Errors
///
/// Returns [`VantageError::InvalidTexture`] if either side exceeds
/// `max_dimension`.
pub fn check_dimensions(
    width: u32,
    height: u32,
    max_dimension: u32,
) -> Result<(), VantageError> {
    if width > max_dimension || height > max_dimension {
        return Err(VantageError::InvalidTexture(format!(
            "{width}x{height} exceeds the {max_dimension} texel limit"
        )));
    }
    Ok(())
}

/// A 2D texture, its default view, and a sampler built from the current
/// filter and wrap settings.
pub struct Texture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    options: TextureOptions,
}

impl Texture {
    /// Create a `width` × `height` texture, optionally uploading `data`
    /// (tightly packed rows).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidTexture`] if the size is zero or over
    /// the device limit, the format is unusable, or `data` does not match
    /// the size and format.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: (u32, u32),
        data: Option<&[u8]>,
        options: TextureOptions,
    ) -> Result<Self, VantageError> {
        Self::create(device, queue, size, data, options, false)
    }

    /// Like [`new`](Self::new), but the format must support being drawn
    /// into.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`VantageError::InvalidTexture`] for
    /// formats that cannot be render attachments.
    pub fn new_render_target(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: (u32, u32),
        options: TextureOptions,
    ) -> Result<Self, VantageError> {
        Self::create(device, queue, size, None, options, true)
    }

    fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: (u32, u32),
        data: Option<&[u8]>,
        options: TextureOptions,
        render_target: bool,
    ) -> Result<Self, VantageError> {
        let (width, height) = size;
        let expected = expected_data_len(options.format, width, height)?;
        check_dimensions(width, height, device.limits().max_texture_dimension_2d)?;
        let usage = texture_usages(options.format, device.features(), render_target)?;
        if let Some(bytes) = data {
            if bytes.len() != expected {
                log::warn!(
                    "rejected {width}x{height} {:?} upload of {} bytes",
                    options.format,
                    bytes.len()
                );
                return Err(VantageError::InvalidTexture(format!(
                    "expected {expected} bytes of data, got {}",
                    bytes.len()
                )));
            }
        }

        let extent = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: options.format,
            usage,
            view_formats: &[],
        });

        if let Some(bytes) = data {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                bytes,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some((expected / height as usize) as u32),
                    rows_per_image: Some(height),
                },
                extent,
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, options.filter, options.wrap);
        log::debug!("created {width}x{height} {:?} texture", options.format);

        Ok(Self {
            texture,
            view,
            sampler,
            options,
        })
    }

    /// Change the min/mag filter, rebuilding the sampler.
    pub fn set_filter(&mut self, device: &wgpu::Device, filter: wgpu::FilterMode) {
        self.options.filter = filter;
        self.sampler = create_sampler(device, filter, self.options.wrap);
    }

    /// Change the u/v address mode, rebuilding the sampler.
    pub fn set_wrap(&mut self, device: &wgpu::Device, wrap: wgpu::AddressMode) {
        self.options.wrap = wrap;
        self.sampler = create_sampler(device, self.options.filter, wrap);
    }

    /// The underlying GPU texture.
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// A default full-texture view.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Sampler matching the current filter and wrap.
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Current creation/sampling options.
    pub fn options(&self) -> TextureOptions {
        self.options
    }

    /// Whether the texture can be a render attachment.
    pub fn is_render_target(&self) -> bool {
        self.texture
            .usage()
            .contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
    }

    /// Texel format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.options.format
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.texture.width()
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.texture.height()
    }

    /// `(width, height)` in texels.
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

fn create_sampler(
    device: &wgpu::Device,
    filter: wgpu::FilterMode,
    wrap: wgpu::AddressMode,
) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Texture Sampler"),
        address_mode_u: wrap,
        address_mode_v: wrap,
        address_mode_w: wrap,
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
