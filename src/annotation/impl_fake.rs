use crate::annotation::interface::AnnotationReader;
use crate::annotation::model::{AnnotationSet, AnomalyRegion, UnclearRegion};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Serves an in-memory annotation set in place of the annotation file reader.
pub struct AnnotationReaderFake {
    annotations: AnnotationSet,
    logger: Arc<dyn Logger>,
}

impl AnnotationReaderFake {
    pub fn new(logger: Arc<dyn Logger>, annotations: AnnotationSet) -> Self {
        Self {
            annotations,
            logger: logger.with_namespace("annotation_reader").with_namespace("fake"),
        }
    }

    /// A recording of 60 frames. Frames 40..52 show a rope defect moving
    /// right ("A001") and a second, short one ("A002"); everything else is
    /// normal.
    pub fn demo(logger: Arc<dyn Logger>) -> Self {
        let anomaly_frames: Vec<u32> = (40..52).collect();
        let normal_frames: Vec<u32> = (0..40).chain(52..60).collect();

        let mut anomaly_regions: Vec<AnomalyRegion> = (40..48)
            .map(|frame| AnomalyRegion {
                frame,
                x_start: 100 + (frame - 40) * 24,
                x_end: 140 + (frame - 40) * 24,
                anomaly_id: "A001".to_string(),
            })
            .collect();
        anomaly_regions.extend((48..52).map(|frame| AnomalyRegion {
            frame,
            x_start: 480,
            x_end: 530,
            anomaly_id: "A002".to_string(),
        }));

        let unclear_regions = vec![
            UnclearRegion {
                frame: 44,
                x_start: 400,
                x_end: 460,
            },
            UnclearRegion {
                frame: 58,
                x_start: 0,
                x_end: 64,
            },
        ];

        Self::new(
            logger,
            AnnotationSet {
                normal_frames,
                anomaly_frames,
                anomaly_regions,
                unclear_regions,
            },
        )
    }
}

impl AnnotationReader for AnnotationReaderFake {
    fn read(&self) -> Result<AnnotationSet, Box<dyn std::error::Error>> {
        self.logger.info(&format!(
            "Reading annotations: {} normal frames, {} anomaly frames, {} anomaly regions, {} unclear regions",
            self.annotations.normal_frames.len(),
            self.annotations.anomaly_frames.len(),
            self.annotations.anomaly_regions.len(),
            self.annotations.unclear_regions.len(),
        ))?;
        Ok(self.annotations.clone())
    }
}
