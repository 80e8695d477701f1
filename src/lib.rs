//! Face region-of-interest extraction.
//!
//! Given a (possibly downscaled) detection image and the full-resolution
//! original, locate a face in the detection image, map its bounding box into
//! original-image coordinates, and return the losslessly encoded crop.
//!
//! # Example
//!
//! ```no_run
//! use face_roi::{FaceRoiExtractor, FaceBounds, FaceDetector};
//!
//! struct MyDetector;
//! impl FaceDetector for MyDetector {
//!     fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds> {
//!         // Your detection backend here
//!         vec![]
//!     }
//! }
//!
//! let detection = std::fs::read("small.png").unwrap();
//! let original = std::fs::read("full.png").unwrap();
//! let roi = FaceRoiExtractor::new(detection, original, Box::new(MyDetector))
//!     .unwrap()
//!     .padding_ratio(0.2)
//!     .extract()
//!     .unwrap();
//! println!("face at {:?}, {} bytes", roi.bounds, roi.data.len());
//! ```
#![warn(missing_docs)]

mod codec;
mod crop;
mod error;
mod extract;
/// Face detection traits and data types.
pub mod face_detector;
/// Coordinate mapping between detection and original image spaces.
pub mod mapping;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based face detector backend.
pub mod rustface_backend;

/// Error type returned by face-roi operations.
pub use error::FaceRoiError;
/// Face detection trait and face bounding-box type.
pub use face_detector::{FaceBounds, FaceDetector};
/// Affine per-axis scale transform.
pub use mapping::ScaleTransform;
#[cfg(feature = "rustface")]
/// Built-in detector that loads a SeetaFace model from disk.
pub use rustface_backend::RustfaceDetector;

/// Output encoding for the extracted region. Both options are lossless:
/// the crop's pixel values are preserved exactly, never recompressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG encoding.
    #[default]
    Png,

    /// Lossless WebP encoding.
    Webp,
}

/// Result of a single extraction: the encoded crop plus the bounding box
/// it was taken from, in original-image coordinates.
///
/// Owned entirely by the caller; the extractor keeps no state between calls.
#[derive(Debug, Clone)]
pub struct FaceRoi {
    /// The losslessly encoded crop bytes.
    pub data: Vec<u8>,

    /// The output format used.
    pub format: OutputFormat,

    /// Width of the crop in pixels.
    pub width: u32,

    /// Height of the crop in pixels.
    pub height: u32,

    /// Final clamped face box in original-image coordinates, carrying the
    /// winning candidate's confidence.
    pub bounds: FaceBounds,
}

/// Builder for extracting the face region of interest from an image pair.
///
/// Validates that both inputs look like decodable images on construction,
/// then runs the full pipeline on [`extract`](Self::extract). The detection
/// backend is chosen at construction time and used as-is; no runtime
/// backend switching happens inside a call.
pub struct FaceRoiExtractor {
    detection: Vec<u8>,
    original: Vec<u8>,
    detector: Box<dyn FaceDetector>,
    min_confidence: f64,
    padding_ratio: f64,
    min_face_size: (u32, u32),
    format: OutputFormat,
}

impl FaceRoiExtractor {
    /// Create an extractor from two encoded images (JPEG, PNG, or WebP) and
    /// a detection backend. `detection` may be a resized copy of `original`
    /// used only to speed up detection; the crop is always taken from
    /// `original`.
    pub fn new(
        detection: Vec<u8>,
        original: Vec<u8>,
        detector: Box<dyn FaceDetector>,
    ) -> Result<Self, FaceRoiError> {
        codec::detect_format(&detection)?;
        codec::detect_format(&original)?;

        Ok(Self {
            detection,
            original,
            detector,
            min_confidence: 0.0,
            padding_ratio: 0.0,
            min_face_size: (0, 0),
            format: OutputFormat::default(),
        })
    }

    /// Drop detection candidates scoring below this threshold (default: 0.0,
    /// i.e. keep everything). The scale is backend-defined — SeetaFace scores
    /// run roughly 0–5, neural backends often emit [0, 1] probabilities.
    pub fn min_confidence(mut self, confidence: f64) -> Self {
        self.min_confidence = confidence;
        self
    }

    /// Symmetric context margin around the face box (default: 0.0).
    ///
    /// Each side is expanded by `ratio` times the box's own dimension on
    /// that axis before clamping to the original image. Must be finite and
    /// non-negative.
    pub fn padding_ratio(mut self, ratio: f64) -> Self {
        self.padding_ratio = ratio;
        self
    }

    /// Minimum candidate size in detection-image pixels (default: 0×0).
    /// Smaller candidates are discarded before selection.
    pub fn min_face_size(mut self, width: u32, height: u32) -> Self {
        self.min_face_size = (width, height);
        self
    }

    /// Set the output encoding (default: `OutputFormat::Png`).
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the extraction with the configured settings.
    ///
    /// "No face found" surfaces as [`FaceRoiError::NoFaceDetected`] — a
    /// normal, recoverable outcome the caller decides how to handle (for
    /// instance by falling back to the full original image).
    pub fn extract(self) -> Result<FaceRoi, FaceRoiError> {
        extract::extract_pipeline(
            &self.detection,
            &self.original,
            self.min_confidence,
            self.padding_ratio,
            self.min_face_size,
            self.format,
            self.detector.as_ref(),
        )
    }
}
