use std::path::Path;

use crate::error::FaceRoiError;
use crate::face_detector::{FaceBounds, FaceDetector};

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// Loads a SeetaFace model file on construction. A fresh engine is created
/// per `detect` call from the shared model, which keeps the backend `Sync`
/// despite the engine itself being stateful.
pub struct RustfaceDetector {
    model: rustface::Model,
    min_face_size: u32,
    score_thresh: f64,
    pyramid_scale_factor: f32,
    slide_window_step: (u32, u32),
}

impl RustfaceDetector {
    /// Load a SeetaFace model (e.g. `seeta_fd_frontal_v1.0.bin`) from disk.
    pub fn from_model_file(path: impl AsRef<Path>) -> Result<Self, FaceRoiError> {
        let data = std::fs::read(path.as_ref())
            .map_err(|e| FaceRoiError::ModelLoad(e.to_string()))?;
        let model = rustface::read_model(std::io::Cursor::new(data))
            .map_err(|e| FaceRoiError::ModelLoad(e.to_string()))?;
        Ok(Self {
            model,
            min_face_size: 20,
            score_thresh: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: (4, 4),
        })
    }

    /// Minimum face size in pixels (default: 20). Larger values are faster
    /// but miss small faces.
    pub fn min_face_size(mut self, size: u32) -> Self {
        self.min_face_size = size;
        self
    }

    /// Engine score threshold (default: 2.0). SeetaFace scores are roughly
    /// 0–5; higher thresholds trade recall for precision.
    pub fn score_thresh(mut self, thresh: f64) -> Self {
        self.score_thresh = thresh;
        self
    }

    /// Detection pyramid scale factor (default: 0.8). Closer to 1.0 is more
    /// thorough and slower.
    pub fn pyramid_scale_factor(mut self, factor: f32) -> Self {
        self.pyramid_scale_factor = factor;
        self
    }

    /// Sliding window step in pixels (default: 4, 4).
    pub fn slide_window_step(mut self, x: u32, y: u32) -> Self {
        self.slide_window_step = (x, y);
        self
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBounds> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.min_face_size);
        detector.set_score_thresh(self.score_thresh);
        detector.set_pyramid_scale_factor(self.pyramid_scale_factor);
        detector.set_slide_window_step(self.slide_window_step.0, self.slide_window_step.1);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBounds {
                    x: bbox.x() as f64,
                    y: bbox.y() as f64,
                    width: bbox.width() as f64,
                    height: bbox.height() as f64,
                    confidence: face.score(),
                }
            })
            .collect()
    }
}
