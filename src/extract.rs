use log::{debug, trace};

use crate::codec::{decode_image, encode_image};
use crate::crop::{clamp_to_image, pad_bounds, select_best};
use crate::error::FaceRoiError;
use crate::face_detector::{FaceBounds, FaceDetector};
use crate::mapping::ScaleTransform;
use crate::{FaceRoi, OutputFormat};

/// Full extraction pipeline: decode both inputs → detect on the grayscale
/// detection image → filter and select → map into original coordinates →
/// pad → clamp → crop → encode.
///
/// Single pass, no state across calls. The original image is never mutated;
/// the crop is a fresh buffer.
#[allow(clippy::too_many_arguments)]
pub(crate) fn extract_pipeline(
    detection: &[u8],
    original: &[u8],
    min_confidence: f64,
    padding_ratio: f64,
    min_face_size: (u32, u32),
    format: OutputFormat,
    detector: &dyn FaceDetector,
) -> Result<FaceRoi, FaceRoiError> {
    if !padding_ratio.is_finite() || padding_ratio < 0.0 {
        return Err(FaceRoiError::InvalidPaddingRatio(padding_ratio));
    }

    let detection_img = decode_image(detection)?;
    let original_img = decode_image(original)?;

    if detection_img.width() == 0 || detection_img.height() == 0 {
        return Err(FaceRoiError::ZeroDimensions);
    }
    if original_img.width() == 0 || original_img.height() == 0 {
        return Err(FaceRoiError::ZeroDimensions);
    }

    let gray = image::imageops::grayscale(&detection_img);
    let candidates = detector.detect(gray.as_raw(), gray.width(), gray.height());
    debug!(
        "detector produced {} candidate(s) on {}x{} detection image",
        candidates.len(),
        gray.width(),
        gray.height()
    );

    let survivors: Vec<FaceBounds> = candidates
        .into_iter()
        .filter(|c| c.confidence >= min_confidence)
        .filter(|c| c.width >= min_face_size.0 as f64 && c.height >= min_face_size.1 as f64)
        .collect();
    trace!("{} candidate(s) after filtering", survivors.len());

    let best = select_best(&survivors).ok_or(FaceRoiError::NoFaceDetected)?;

    let transform = ScaleTransform::between(
        (detection_img.width(), detection_img.height()),
        (original_img.width(), original_img.height()),
    )?;
    let mapped = transform.apply(best);
    let padded = pad_bounds(&mapped, padding_ratio);
    let region = clamp_to_image(&padded, original_img.width(), original_img.height())?;
    debug!(
        "face at ({}, {}) {}x{} in original image, confidence {}",
        region.x, region.y, region.width, region.height, best.confidence
    );

    let crop = original_img.crop_imm(region.x, region.y, region.width, region.height);
    let data = encode_image(&crop, format)?;

    Ok(FaceRoi {
        data,
        format,
        width: crop.width(),
        height: crop.height(),
        bounds: FaceBounds {
            x: region.x as f64,
            y: region.y as f64,
            width: region.width as f64,
            height: region.height as f64,
            confidence: best.confidence,
        },
    })
}
