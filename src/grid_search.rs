use crate::annotation::labels::GroundTruth;
use crate::classifier::interface::OneClassClassifier;
use crate::dataset::FeatureSet;
use crate::library::logger::interface::Logger;
use crate::metrics::{self, Metrics};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub gamma: f64,
    pub nu: f64,
    pub metrics: Metrics,
}

impl GridCell {
    /// `{identity TP} / {sample recall} / {FP frame %}`
    pub fn summary(&self) -> String {
        format!(
            "{} / {:.4} / {:.2}",
            self.metrics.tp_anomaly_level, self.metrics.recall, self.metrics.fp_frames_percentage
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSearchResult {
    pub gamma_values: Vec<f64>,
    pub nu_values: Vec<f64>,
    /// Row-major: one row per nu, one column per gamma.
    pub cells: Vec<GridCell>,
}

impl GridSearchResult {
    /// Header row of gammas, then one row per nu.
    pub fn to_delimited(&self, separator: &str) -> String {
        let mut table = String::new();
        table.push_str(separator);
        table.push_str(&self.gamma_values.iter().join(separator));
        table.push('\n');

        for (nu, row) in self
            .nu_values
            .iter()
            .zip(self.cells.chunks(self.gamma_values.len().max(1)))
        {
            table.push_str(&nu.to_string());
            for cell in row {
                table.push_str(separator);
                table.push_str(&cell.summary());
            }
            table.push('\n');
        }
        table
    }

    /// Cells under the FP frame limit, most identities found first, then by
    /// sample recall.
    pub fn ranked(&self, max_fp_frames_percentage: f64) -> Vec<&GridCell> {
        self.cells
            .iter()
            .filter(|cell| cell.metrics.fp_frames_percentage < max_fp_frames_percentage)
            .sorted_by_key(|cell| {
                (
                    Reverse(cell.metrics.tp_anomaly_level),
                    Reverse(OrderedFloat(cell.metrics.recall)),
                )
            })
            .collect()
    }
}

pub struct GridSearch {
    gamma_values: Vec<f64>,
    nu_values: Vec<f64>,
    logger: Arc<dyn Logger>,
}

impl GridSearch {
    pub fn new(logger: Arc<dyn Logger>, gamma_values: Vec<f64>, nu_values: Vec<f64>) -> Self {
        Self {
            gamma_values,
            nu_values,
            logger: logger.with_namespace("grid_search"),
        }
    }

    pub fn run(
        &self,
        classifier: &mut dyn OneClassClassifier,
        features: &FeatureSet,
        truth: &GroundTruth,
    ) -> Result<GridSearchResult, Box<dyn std::error::Error>> {
        let mut cells = Vec::with_capacity(self.nu_values.len() * self.gamma_values.len());

        for (nu, gamma) in self
            .nu_values
            .iter()
            .cartesian_product(self.gamma_values.iter())
        {
            self.logger.info(&format!("gamma={}, nu={}", gamma, nu))?;
            classifier.fit(&features.train, *gamma, *nu)?;
            let normal_predicted = classifier.predict(&features.normal_test)?;
            let anomaly_predicted = classifier.predict(&features.anomaly_test)?;
            let metrics = metrics::evaluate(&normal_predicted, &anomaly_predicted, truth)?;

            cells.push(GridCell {
                gamma: *gamma,
                nu: *nu,
                metrics,
            });
        }

        Ok(GridSearchResult {
            gamma_values: self.gamma_values.clone(),
            nu_values: self.nu_values.clone(),
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(tp_anomaly_level: usize, recall: f64, fp_frames_percentage: f64) -> Metrics {
        Metrics {
            tp_samples: 0,
            anomaly_samples: 0,
            recall,
            fp_frames: 0,
            total_frames: 0,
            fp_frames_percentage,
            tp_anomaly_level,
            anomaly_count: 3,
            recall_anomaly_level: tp_anomaly_level as f64 / 3.0,
        }
    }

    fn result(cells: Vec<(usize, f64, f64)>, gamma_values: Vec<f64>, nu_values: Vec<f64>) -> GridSearchResult {
        let cells = nu_values
            .iter()
            .cartesian_product(gamma_values.iter())
            .zip(cells)
            .map(|((nu, gamma), (tp, recall, fp))| GridCell {
                gamma: *gamma,
                nu: *nu,
                metrics: metrics(tp, recall, fp),
            })
            .collect();
        GridSearchResult {
            gamma_values,
            nu_values,
            cells,
        }
    }

    #[test]
    fn test_table_has_header_and_one_row_per_nu() {
        let result = result(
            vec![
                (1, 0.5, 10.0),
                (2, 0.25, 20.0),
                (3, 0.125, 30.0),
                (0, 0.0, 0.0),
                (3, 1.0, 100.0),
                (2, 0.33333, 49.999),
            ],
            vec![0.01, 1.0, 100.0],
            vec![0.001, 0.1],
        );

        let table = result.to_delimited(";");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ";0.01;1;100");
        assert_eq!(lines[1], "0.001;1 / 0.5000 / 10.00;2 / 0.2500 / 20.00;3 / 0.1250 / 30.00");
        assert_eq!(lines[2], "0.1;0 / 0.0000 / 0.00;3 / 1.0000 / 100.00;2 / 0.3333 / 50.00");
        for line in &lines {
            assert_eq!(line.split(';').count(), 4);
        }
    }

    #[test]
    fn test_ranking_filters_fp_limit_and_sorts_by_identity_then_recall() {
        let result = result(
            vec![
                (2, 0.4, 10.0),
                (3, 0.9, 50.0),
                (2, 0.6, 49.9),
                (3, 0.1, 5.0),
            ],
            vec![0.1, 1.0],
            vec![0.01, 0.1],
        );

        let ranked: Vec<(usize, f64)> = result
            .ranked(50.0)
            .into_iter()
            .map(|cell| (cell.metrics.tp_anomaly_level, cell.metrics.recall))
            .collect();

        assert_eq!(ranked, vec![(3, 0.1), (2, 0.6), (2, 0.4)]);
    }
}
