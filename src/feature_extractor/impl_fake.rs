use crate::annotation::model::{AnnotationSet, FrameId};
use crate::feature_extractor::interface::FeatureExtractor;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;

/// Synthetic features standing in for a HOG extractor. Each frame gets seeded
/// noise; cells overlapping a known anomalous pixel range are shifted by
/// `anomaly_offset` so a one-class model can tell them apart.
pub struct FeatureExtractorFake {
    frame_width: u32,
    cell_width: u32,
    feature_count: usize,
    anomaly_offset: f32,
    anomalous_columns: HashMap<FrameId, Vec<(u32, u32)>>,
    fitted: bool,
    logger: Arc<dyn Logger>,
}

impl FeatureExtractorFake {
    pub fn new(
        logger: Arc<dyn Logger>,
        frame_width: u32,
        cell_width: u32,
        feature_count: usize,
    ) -> Self {
        Self {
            frame_width,
            cell_width,
            feature_count,
            anomaly_offset: 4.0,
            anomalous_columns: HashMap::new(),
            fitted: false,
            logger: logger.with_namespace("feature_extractor").with_namespace("fake"),
        }
    }

    /// Plants a visible defect wherever `annotations` says there is one.
    pub fn with_anomalies_from(mut self, annotations: &AnnotationSet) -> Self {
        for region in &annotations.anomaly_regions {
            self.anomalous_columns
                .entry(region.frame)
                .or_default()
                .push((region.x_start, region.x_end));
        }
        self
    }

    fn extract(&self, frames: &[FrameId]) -> Result<Vec<Vec<f32>>, Box<dyn std::error::Error>> {
        let cells = (self.frame_width / self.cell_width) as usize;
        let noise = Uniform::new(-1.0f32, 1.0f32)?;
        let mut samples = Vec::with_capacity(frames.len() * cells);

        for frame in frames {
            let mut rng = StdRng::seed_from_u64(u64::from(*frame));
            let columns = self.anomalous_columns.get(frame);
            for cell in 0..cells {
                let cell_start = cell as u32 * self.cell_width;
                let cell_end = cell_start + self.cell_width - 1;
                let is_anomalous = columns.is_some_and(|columns| {
                    columns
                        .iter()
                        .any(|(x_start, x_end)| *x_start <= cell_end && cell_start <= *x_end)
                });
                let offset = if is_anomalous { self.anomaly_offset } else { 0.0 };

                samples.push(
                    (0..self.feature_count)
                        .map(|_| noise.sample(&mut rng) + offset)
                        .collect(),
                );
            }
        }

        Ok(samples)
    }
}

impl FeatureExtractor for FeatureExtractorFake {
    fn fit_transform(&mut self, frames: &[FrameId]) -> Result<Vec<Vec<f32>>, Box<dyn std::error::Error>> {
        if self.cell_width == 0 || self.frame_width < self.cell_width {
            return Err("frame narrower than one cell".into());
        }
        self.logger
            .info(&format!("Fitting on {} frames", frames.len()))?;
        self.fitted = true;
        self.extract(frames)
    }

    fn transform(&self, frames: &[FrameId]) -> Result<Vec<Vec<f32>>, Box<dyn std::error::Error>> {
        if !self.fitted {
            return Err("feature extractor used before fit_transform".into());
        }
        self.logger
            .info(&format!("Extracting features for {} frames", frames.len()))?;
        self.extract(frames)
    }

    fn cell_width(&self) -> u32 {
        self.cell_width
    }
}
