use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::FaceRoiError;
use crate::OutputFormat;

/// Decode input bytes into a `DynamicImage`, normalized to an 8-bit layout.
///
/// Only the 8-bit variants (`Luma8`, `LumaA8`, `Rgb8`, `Rgba8`) pass through;
/// anything else (16-bit PNG, float formats) cannot be re-encoded losslessly
/// by [`encode_image`] and is rejected as unsupported.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, FaceRoiError> {
    let decoded =
        image::load_from_memory(input).map_err(|e| FaceRoiError::Decode(e.to_string()))?;

    match decoded {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => Ok(decoded),
        _ => Err(FaceRoiError::UnsupportedFormat),
    }
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, FaceRoiError> {
    image::guess_format(input).map_err(|e| FaceRoiError::Decode(e.to_string()))
}

fn color_type(image: &DynamicImage) -> Result<ExtendedColorType, FaceRoiError> {
    match image {
        DynamicImage::ImageLuma8(_) => Ok(ExtendedColorType::L8),
        DynamicImage::ImageLumaA8(_) => Ok(ExtendedColorType::La8),
        DynamicImage::ImageRgb8(_) => Ok(ExtendedColorType::Rgb8),
        DynamicImage::ImageRgba8(_) => Ok(ExtendedColorType::Rgba8),
        _ => Err(FaceRoiError::UnsupportedFormat),
    }
}

/// Encode an image losslessly in the requested container format.
///
/// Pixel values are preserved exactly; no resizing or recompression happens
/// here. The WebP path uses the pure-Rust lossless encoder.
pub(crate) fn encode_image(
    image: &DynamicImage,
    format: OutputFormat,
) -> Result<Vec<u8>, FaceRoiError> {
    let color = color_type(image)?;
    let mut buffer = Vec::new();

    match format {
        OutputFormat::Png => {
            let encoder = PngEncoder::new(&mut buffer);
            encoder
                .write_image(image.as_bytes(), image.width(), image.height(), color)
                .map_err(|e| FaceRoiError::Encode(e.to_string()))?;
        }
        OutputFormat::Webp => {
            let encoder = WebPEncoder::new_lossless(&mut buffer);
            encoder
                .write_image(image.as_bytes(), image.width(), image.height(), color)
                .map_err(|e| FaceRoiError::Encode(e.to_string()))?;
        }
    }

    Ok(buffer)
}
