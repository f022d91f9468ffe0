use crate::annotation::model::FrameId;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EvaluationError {
    #[error("Anomaly region references frame {frame} which is not an anomaly frame")]
    UnknownAnomalyFrame { frame: FrameId },

    #[error("Region on frame {frame} has x_start {x_start} > x_end {x_end}")]
    InvalidRegion {
        frame: FrameId,
        x_start: u32,
        x_end: u32,
    },

    #[error("Invalid sample geometry: {0}")]
    InvalidGeometry(&'static str),

    #[error("No normal frames left for training")]
    EmptyTrainingSet,

    #[error("{rows} training samples cannot be split evenly across {frames} frames")]
    UnevenSamplePartition { rows: usize, frames: usize },

    #[error("Sample {row} has {actual} features, expected {expected}")]
    FeatureDimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Length mismatch ({context}): expected {expected}, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Classifier has not been fitted")]
    ClassifierNotFitted,

    #[error("Invalid hyperparameter {name}={value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },
}
