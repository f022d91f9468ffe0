use crate::annotation::model::FrameId;

/// Turns frames into per-cell feature vectors, `samples_per_frame` rows per
/// frame in frame order.
pub trait FeatureExtractor {
    fn fit_transform(&mut self, frames: &[FrameId]) -> Result<Vec<Vec<f32>>, Box<dyn std::error::Error>>;
    fn transform(&self, frames: &[FrameId]) -> Result<Vec<Vec<f32>>, Box<dyn std::error::Error>>;
    /// Pixels covered by one sample.
    fn cell_width(&self) -> u32;
}
