use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType};
use tracing::debug;

use crate::domain::entities::ImageFile;
use crate::shared::config::CompressionConfig;
use crate::shared::error::Result;

/// Quality is stepped down by this amount per re-encode attempt.
const QUALITY_STEP: f32 = 0.05;
/// Below this quality the last produced result is accepted regardless of size.
const QUALITY_FLOOR: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    WebP,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::WebP => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::WebP => "image/webp",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompressionOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// Starting encode quality, 0.0 to 1.0.
    pub quality: f32,
    pub max_size_kb: u64,
    pub output: OutputFormat,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1920,
            quality: 0.8,
            max_size_kb: 500,
            output: OutputFormat::Jpeg,
        }
    }
}

impl From<&CompressionConfig> for CompressionOptions {
    fn from(config: &CompressionConfig) -> Self {
        Self {
            max_width: config.max_width,
            max_height: config.max_height,
            quality: config.quality,
            max_size_kb: config.max_size_kb,
            output: OutputFormat::Jpeg,
        }
    }
}

/// Shrinks an image below the configured size budget.
///
/// Files already within budget are returned untouched, without decoding.
/// Oversized files are decoded, downscaled (never upscaled) preserving
/// aspect ratio, and re-encoded at decreasing quality until the budget is
/// met or the quality floor is reached; the last result is then accepted
/// regardless of size. The filename extension is rewritten to match the
/// output format.
pub fn compress_image(file: &ImageFile, options: &CompressionOptions) -> Result<ImageFile> {
    let budget = options.max_size_kb as usize * 1024;

    if file.size_bytes() <= budget {
        debug!(
            file = %file.file_name,
            size_kb = file.size_bytes() / 1024,
            "file already within budget, skipping compression"
        );
        return Ok(file.clone());
    }

    let decoded = image::load_from_memory(&file.data)?;
    let (width, height) = fit_dimensions(
        decoded.width(),
        decoded.height(),
        options.max_width,
        options.max_height,
    );

    let scaled = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    let mut quality = options.quality;
    let mut encoded;

    loop {
        encoded = encode(&scaled, options.output, quality)?;
        if encoded.len() <= budget {
            break;
        }
        // Lossless output cannot be traded for size; accept the first pass.
        if options.output == OutputFormat::WebP {
            break;
        }
        quality -= QUALITY_STEP;
        if quality < QUALITY_FLOOR {
            break;
        }
    }

    debug!(
        file = %file.file_name,
        before_kb = file.size_bytes() / 1024,
        after_kb = encoded.len() / 1024,
        quality_pct = (quality.max(QUALITY_FLOOR) * 100.0).round() as u32,
        "compressed image"
    );

    Ok(ImageFile::new(
        rewrite_extension(&file.file_name, options.output),
        options.output.mime_type(),
        Bytes::from(encoded),
    ))
}

/// Compresses with stricter preview limits and renders the result as an
/// inline base64 data URL.
pub fn compress_image_to_data_url(file: &ImageFile, options: &CompressionOptions) -> Result<String> {
    let preview = CompressionOptions {
        max_width: 800,
        max_height: 800,
        max_size_kb: 200,
        ..options.clone()
    };
    let compressed = compress_image(file, &preview)?;
    Ok(format!(
        "data:{};base64,{}",
        compressed.mime_type,
        STANDARD.encode(&compressed.data)
    ))
}

/// Downscale-only fit, using the smaller of the two ratio factors so the
/// aspect ratio is preserved.
fn fit_dimensions(src_width: u32, src_height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if src_width <= max_width && src_height <= max_height {
        return (src_width, src_height);
    }

    let ratio = (max_width as f64 / src_width as f64).min(max_height as f64 / src_height as f64);
    (
        (src_width as f64 * ratio).round() as u32,
        (src_height as f64 * ratio).round() as u32,
    )
}

fn encode(image: &DynamicImage, format: OutputFormat, quality: f32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb = image.to_rgb8();
            let mut encoder =
                JpegEncoder::new_with_quality(&mut buffer, (quality * 100.0).round() as u8);
            encoder.encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        OutputFormat::WebP => {
            let rgba = image.to_rgba8();
            let encoder = WebPEncoder::new_lossless(&mut buffer);
            encoder.encode(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                ExtendedColorType::Rgba8,
            )?;
        }
    }
    Ok(buffer)
}

fn rewrite_extension(file_name: &str, format: OutputFormat) -> String {
    let base = match file_name.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base,
        _ => file_name,
    };
    format!("{}.{}", base, format.extension())
}
