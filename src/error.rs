use thiserror::Error;

/// Errors reported by face-roi operations.
///
/// `NoFaceDetected` and `EmptyRegion` are expected, recoverable outcomes;
/// everything else indicates bad input or an I/O-level failure. Nothing is
/// retried internally — detection on the same input is deterministic.
#[derive(Debug, Error)]
pub enum FaceRoiError {
    /// Input bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Decoded pixel layout the adapter cannot normalize losslessly
    /// (e.g. 16-bit channels).
    #[error("unsupported pixel format")]
    UnsupportedFormat,

    /// An image, or a mapping source size, has a zero dimension.
    #[error("image dimensions are zero")]
    ZeroDimensions,

    /// Padding ratio was negative or not finite.
    #[error("padding ratio must be finite and >= 0, got {0}")]
    InvalidPaddingRatio(f64),

    /// The detector found nothing, or no candidate survived filtering.
    #[error("no face detected")]
    NoFaceDetected,

    /// Clamping to the original image left the face box with zero area.
    #[error("face region collapsed to zero area after clamping")]
    EmptyRegion,

    /// The crop could not be encoded.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// A detection model file could not be read or parsed.
    #[error("failed to load detection model: {0}")]
    ModelLoad(String),
}
