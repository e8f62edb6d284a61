use image::{
    DynamicImage, ImageError, ImageFormat,
    codecs::{jpeg::JpegEncoder, png::PngEncoder, webp::WebPEncoder},
    imageops::FilterType,
};
use std::io::Cursor;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Longest allowed side; smaller inputs are never upscaled.
    pub max_dimension: u32,
    /// Encoder quality in (0, 1]. Honored by JPEG; WebP output is lossless.
    pub quality: f32,
    pub format: OutputFormat,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            max_dimension: 2400,
            quality: 0.9,
            format: OutputFormat::Jpeg,
        }
    }
}

/// Resize and transcode an uploaded image before it goes to object storage.
///
/// Infallible by contract: any decode or encode failure falls back to the
/// original bytes so the upload can always proceed, and an "optimized"
/// result that came out larger than the input is discarded for the same
/// reason.
pub fn prepare_image(input: &[u8], opts: &ImageOptions) -> Vec<u8> {
    match try_prepare(input, opts) {
        Ok(encoded) if encoded.len() < input.len() => encoded,
        Ok(_) => input.to_vec(),
        Err(err) => {
            warn!("Image preparation failed, using original upload: {err}");
            input.to_vec()
        }
    }
}

fn try_prepare(input: &[u8], opts: &ImageOptions) -> Result<Vec<u8>, ImageError> {
    let img = image::load_from_memory(input)?;

    let (width, height) = (img.width(), img.height());
    let max = opts.max_dimension.max(1) as f64;
    let scale = (max / width as f64).min(max / height as f64).min(1.0);

    let img = if scale < 1.0 {
        let target_w = ((width as f64 * scale).round() as u32).max(1);
        let target_h = ((height as f64 * scale).round() as u32).max(1);
        img.resize_exact(target_w, target_h, FilterType::Lanczos3)
    } else {
        img
    };

    encode(&img, opts)
}

fn encode(img: &DynamicImage, opts: &ImageOptions) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    match opts.format {
        OutputFormat::Jpeg => {
            let quality = (opts.quality.clamp(0.01, 1.0) * 100.0).round() as u8;
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            img.to_rgb8().write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new(&mut buf);
            img.to_rgba8().write_with_encoder(encoder)?;
        }
        OutputFormat::WebP => {
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.to_rgba8().write_with_encoder(encoder)?;
        }
    }
    Ok(buf)
}
