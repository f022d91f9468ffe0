use crate::grid_search::GridCell;
use crate::metrics::{FrameFalsePositives, Metrics};

/// Human-readable output of an evaluation run.
pub trait Report {
    /// Metrics of a run on normal data only, e.g. the training set.
    fn false_positive_frames(
        &mut self,
        title: &str,
        result: &FrameFalsePositives,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn metrics(&mut self, title: &str, metrics: &Metrics) -> Result<(), Box<dyn std::error::Error>>;

    /// Grid search combinations in ranked order.
    fn ranked(&mut self, cells: &[&GridCell]) -> Result<(), Box<dyn std::error::Error>>;
}
