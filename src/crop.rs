use crate::error::FaceRoiError;
use crate::face_detector::FaceBounds;

/// Integer crop rectangle within a source image.
///
/// Always lies fully inside the image it was clamped against:
/// `x + width <= image width` and `y + height <= image height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// X coordinate of the top-left corner (pixels).
    pub x: u32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: u32,
    /// Width of the region in pixels.
    pub width: u32,
    /// Height of the region in pixels.
    pub height: u32,
}

/// Pick the winning candidate: highest confidence, ties broken by larger
/// box area. Returns `None` for an empty slice — the caller turns that into
/// `NoFaceDetected`.
///
/// NaN confidences compare as equal under the `partial_cmp` fallback, so a
/// NaN never wins over a real score by ordering accident alone.
pub(crate) fn select_best(candidates: &[FaceBounds]) -> Option<&FaceBounds> {
    candidates.iter().max_by(|a, b| {
        a.confidence
            .partial_cmp(&b.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.area()
                    .partial_cmp(&b.area())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    })
}

/// Expand a box by a symmetric per-axis margin: `width × ratio` on each
/// horizontal side, `height × ratio` on each vertical side. The result may
/// overhang the image; clamping happens afterwards.
pub(crate) fn pad_bounds(bounds: &FaceBounds, ratio: f64) -> FaceBounds {
    let dx = bounds.width * ratio;
    let dy = bounds.height * ratio;
    FaceBounds {
        x: bounds.x - dx,
        y: bounds.y - dy,
        width: bounds.width + 2.0 * dx,
        height: bounds.height + 2.0 * dy,
        confidence: bounds.confidence,
    }
}

/// Intersect a (possibly overhanging) box with `[0, width) × [0, height)`,
/// shrinking any overhang rather than erroring. A box that slightly exceeds
/// the image due to mapping rounding still yields a valid crop; only a box
/// that collapses to zero area fails with `EmptyRegion`.
pub(crate) fn clamp_to_image(
    bounds: &FaceBounds,
    width: u32,
    height: u32,
) -> Result<CropRegion, FaceRoiError> {
    let x0 = bounds.x.max(0.0);
    let y0 = bounds.y.max(0.0);
    let x1 = (bounds.x + bounds.width).min(width as f64);
    let y1 = (bounds.y + bounds.height).min(height as f64);

    if x1 <= x0 || y1 <= y0 {
        return Err(FaceRoiError::EmptyRegion);
    }

    let x = x0.floor() as u32;
    let y = y0.floor() as u32;
    let w = (x1.ceil() as u32).min(width) - x;
    let h = (y1.ceil() as u32).min(height) - y;

    if w == 0 || h == 0 {
        return Err(FaceRoiError::EmptyRegion);
    }

    Ok(CropRegion {
        x,
        y,
        width: w,
        height: h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x: f64, y: f64, w: f64, h: f64, conf: f64) -> FaceBounds {
        FaceBounds {
            x,
            y,
            width: w,
            height: h,
            confidence: conf,
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn select_empty_is_none() {
        assert!(select_best(&[]).is_none());
    }

    #[test]
    fn select_highest_confidence() {
        let candidates = vec![
            bounds(0.0, 0.0, 50.0, 50.0, 0.6),
            bounds(10.0, 10.0, 20.0, 20.0, 0.8),
        ];
        let best = select_best(&candidates).unwrap();
        assert_eq!(best.confidence, 0.8);
        assert_eq!(best.x, 10.0);
    }

    #[test]
    fn select_tie_prefers_larger_area() {
        let candidates = vec![
            bounds(0.0, 0.0, 20.0, 20.0, 0.7),
            bounds(5.0, 5.0, 40.0, 40.0, 0.7),
            bounds(9.0, 9.0, 10.0, 10.0, 0.7),
        ];
        let best = select_best(&candidates).unwrap();
        assert_eq!(best.width, 40.0);
    }

    #[test]
    fn select_ignores_insertion_order() {
        // Detector ranking is not confidence-sorted; the best box may come last.
        let candidates = vec![
            bounds(0.0, 0.0, 30.0, 30.0, 0.5),
            bounds(1.0, 1.0, 30.0, 30.0, 0.9),
        ];
        assert_eq!(select_best(&candidates).unwrap().confidence, 0.9);
    }

    // ── Padding ──────────────────────────────────────────────────────

    #[test]
    fn zero_padding_is_identity() {
        let b = bounds(10.0, 20.0, 30.0, 40.0, 0.9);
        assert_eq!(pad_bounds(&b, 0.0), b);
    }

    #[test]
    fn padding_expands_symmetrically_per_axis() {
        let b = bounds(100.0, 100.0, 40.0, 80.0, 0.9);
        let padded = pad_bounds(&b, 0.25);
        // 25% of 40 = 10 on each horizontal side, 25% of 80 = 20 vertically.
        assert_eq!(padded.x, 90.0);
        assert_eq!(padded.y, 80.0);
        assert_eq!(padded.width, 60.0);
        assert_eq!(padded.height, 120.0);
    }

    // ── Clamping ─────────────────────────────────────────────────────

    #[test]
    fn in_bounds_box_is_unchanged() {
        let region = clamp_to_image(&bounds(40.0, 40.0, 80.0, 80.0, 0.9), 400, 400).unwrap();
        assert_eq!(
            region,
            CropRegion {
                x: 40,
                y: 40,
                width: 80,
                height: 80
            }
        );
    }

    #[test]
    fn right_overhang_shrinks_width() {
        // Extends 5px past the right edge; clamp shrinks instead of erroring.
        let region = clamp_to_image(&bounds(360.0, 100.0, 45.0, 40.0, 0.9), 400, 400).unwrap();
        assert_eq!(region.x, 360);
        assert_eq!(region.width, 40);
        assert_eq!(region.height, 40);
    }

    #[test]
    fn negative_origin_clamps_to_zero() {
        let region = clamp_to_image(&bounds(-10.0, -20.0, 50.0, 60.0, 0.9), 400, 400).unwrap();
        assert_eq!(region.x, 0);
        assert_eq!(region.y, 0);
        assert_eq!(region.width, 40);
        assert_eq!(region.height, 40);
    }

    #[test]
    fn crop_never_exceeds_image() {
        let cases = [
            bounds(-50.0, -50.0, 500.0, 500.0, 0.9),
            bounds(390.0, 390.0, 100.0, 100.0, 0.9),
            bounds(0.5, 0.5, 398.9, 398.9, 0.9),
        ];
        for b in &cases {
            let r = clamp_to_image(b, 400, 400).unwrap();
            assert!(r.x + r.width <= 400, "{b:?} -> {r:?}");
            assert!(r.y + r.height <= 400, "{b:?} -> {r:?}");
        }
    }

    #[test]
    fn box_fully_outside_collapses() {
        let err = clamp_to_image(&bounds(500.0, 500.0, 50.0, 50.0, 0.9), 400, 400).unwrap_err();
        assert!(matches!(err, FaceRoiError::EmptyRegion));
    }

    #[test]
    fn zero_area_box_collapses() {
        let err = clamp_to_image(&bounds(10.0, 10.0, 0.0, 50.0, 0.9), 400, 400).unwrap_err();
        assert!(matches!(err, FaceRoiError::EmptyRegion));
    }

    #[test]
    fn fractional_box_rounds_outward() {
        // floor the origin, ceil the far edge: the face is never cut short.
        let region = clamp_to_image(&bounds(10.6, 10.6, 20.2, 20.2, 0.9), 100, 100).unwrap();
        assert_eq!(region.x, 10);
        assert_eq!(region.y, 10);
        assert_eq!(region.width, 21);
        assert_eq!(region.height, 21);
    }
}
