use crate::error::FaceRoiError;
use crate::face_detector::FaceBounds;

/// Affine scale mapping between two image coordinate spaces.
///
/// Scale factors are independent per axis: a detection image that was
/// letterboxed or resized without preserving aspect ratio maps correctly,
/// non-uniform scale is not an approximation here. Recomputed per call,
/// carries no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    /// Horizontal scale factor (`to_width / from_width`).
    pub scale_x: f64,
    /// Vertical scale factor (`to_height / from_height`).
    pub scale_y: f64,
}

impl ScaleTransform {
    /// Build the transform that maps coordinates in a `from`-sized image to
    /// the equivalent coordinates in a `to`-sized image.
    ///
    /// A zero axis in `from` is a caller contract violation and fails with
    /// `ZeroDimensions` rather than dividing by zero.
    pub fn between(from: (u32, u32), to: (u32, u32)) -> Result<Self, FaceRoiError> {
        let (from_w, from_h) = from;
        if from_w == 0 || from_h == 0 {
            return Err(FaceRoiError::ZeroDimensions);
        }
        Ok(Self {
            scale_x: to.0 as f64 / from_w as f64,
            scale_y: to.1 as f64 / from_h as f64,
        })
    }

    /// Map a bounding box into the target space. Confidence passes through
    /// unchanged; it belongs to the detection, not the coordinate space.
    pub fn apply(&self, bounds: &FaceBounds) -> FaceBounds {
        FaceBounds {
            x: bounds.x * self.scale_x,
            y: bounds.y * self.scale_y,
            width: bounds.width * self.scale_x,
            height: bounds.height * self.scale_y,
            confidence: bounds.confidence,
        }
    }
}
