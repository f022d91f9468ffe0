use crate::grid_search::GridCell;
use crate::metrics::{FrameFalsePositives, Metrics};
use crate::report::impl_console::{format_false_positive_frames, format_metrics};
use crate::report::interface::Report;
use std::sync::{Arc, Mutex};

/// Collects report lines in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct ReportFake {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl ReportFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    fn push(&self, line: String) -> Result<(), Box<dyn std::error::Error>> {
        self.lines
            .lock()
            .map_err(|e| e.to_string())?
            .push(line);
        Ok(())
    }
}

impl Report for ReportFake {
    fn false_positive_frames(
        &mut self,
        title: &str,
        result: &FrameFalsePositives,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.push(title.to_string())?;
        self.push(format_false_positive_frames(result))
    }

    fn metrics(&mut self, title: &str, metrics: &Metrics) -> Result<(), Box<dyn std::error::Error>> {
        self.push(title.to_string())?;
        for line in format_metrics(metrics) {
            self.push(line)?;
        }
        Ok(())
    }

    fn ranked(&mut self, cells: &[&GridCell]) -> Result<(), Box<dyn std::error::Error>> {
        for cell in cells {
            self.push(format!("gamma={}, nu={}", cell.gamma, cell.nu))?;
            for line in format_metrics(&cell.metrics) {
                self.push(line)?;
            }
        }
        Ok(())
    }
}
