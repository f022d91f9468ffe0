use crate::grid_search::GridCell;
use crate::metrics::{FrameFalsePositives, Metrics};
use crate::report::interface::Report;

pub struct ReportConsole {}

impl ReportConsole {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn format_false_positive_frames(result: &FrameFalsePositives) -> String {
    format!(
        "FP frames: {} / {} ({:.2}%)",
        result.fp_frames,
        result.total_frames,
        result.percentage()
    )
}

pub fn format_metrics(metrics: &Metrics) -> Vec<String> {
    vec![
        format!(
            "Recall (sample level): {} / {} ({:.4})",
            metrics.tp_samples, metrics.anomaly_samples, metrics.recall
        ),
        format!(
            "Recall (anomaly level): {} / {} ({:.4})",
            metrics.tp_anomaly_level, metrics.anomaly_count, metrics.recall_anomaly_level
        ),
        format!(
            "FP frames: {} / {} ({:.2}%)",
            metrics.fp_frames, metrics.total_frames, metrics.fp_frames_percentage
        ),
    ]
}

impl Report for ReportConsole {
    fn false_positive_frames(
        &mut self,
        title: &str,
        result: &FrameFalsePositives,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!();
        println!("{}", title);
        println!("{}", format_false_positive_frames(result));
        Ok(())
    }

    fn metrics(&mut self, title: &str, metrics: &Metrics) -> Result<(), Box<dyn std::error::Error>> {
        println!();
        println!("{}", title);
        for line in format_metrics(metrics) {
            println!("{}", line);
        }
        Ok(())
    }

    fn ranked(&mut self, cells: &[&GridCell]) -> Result<(), Box<dyn std::error::Error>> {
        for cell in cells {
            println!();
            println!("gamma={}, nu={}", cell.gamma, cell.nu);
            for line in format_metrics(&cell.metrics) {
                println!("{}", line);
            }
        }
        Ok(())
    }
}
