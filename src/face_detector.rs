/// Bounding box of a detected face within an image.
///
/// Coordinates are sub-pixel and live in the coordinate space of the image
/// the detector ran on until explicitly mapped elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceBounds {
    /// X coordinate of the top-left corner (pixels).
    pub x: f64,
    /// Y coordinate of the top-left corner (pixels).
    pub y: f64,
    /// Width of the bounding box (pixels).
    pub width: f64,
    /// Height of the bounding box (pixels).
    pub height: f64,
    /// Detection confidence score. Backend-defined scale; only required to
    /// be orderable, not to be a calibrated probability.
    pub confidence: f64,
}

impl FaceBounds {
    /// Box area in square pixels. Used as the tie-breaker when two
    /// candidates share the same confidence.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Pluggable face detection backend.
///
/// Implement this trait to provide a custom detector (cascade, HOG, ONNX,
/// etc.) and pass it to [`crate::FaceRoiExtractor::new`]. Returning an empty
/// vector means "no face found" — a normal outcome, never an error. The
/// returned order is the backend's own ranking; callers must not assume it
/// is sorted by confidence.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a row-major grayscale buffer of `width` × `height` bytes.
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds>;
}
