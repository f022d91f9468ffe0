use crate::classifier::interface::OneClassClassifier;
use crate::error::EvaluationError;
use crate::library::logger::interface::Logger;
use crate::metrics::Label;
use nalgebra::{DMatrix, RowDVector};
use ordered_float::OrderedFloat;
use std::sync::Arc;

struct Model {
    centroid: RowDVector<f32>,
    gamma: f64,
    threshold: f64,
}

impl Model {
    fn score(&self, x: &DMatrix<f32>, row: usize) -> f64 {
        let squared_distance = (x.row(row) - &self.centroid).norm_squared() as f64;
        (-self.gamma * squared_distance).exp()
    }
}

/// Light one-class model: RBF similarity to the training centroid. The
/// decision threshold is the `nu` quantile of the training scores, so about a
/// fraction `nu` of the training samples end up outside.
pub struct OneClassRbfCentroid {
    model: Option<Model>,
    logger: Arc<dyn Logger>,
}

impl OneClassRbfCentroid {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            model: None,
            logger: logger.with_namespace("classifier").with_namespace("rbf_centroid"),
        }
    }
}

impl OneClassClassifier for OneClassRbfCentroid {
    fn fit(&mut self, x: &DMatrix<f32>, gamma: f64, nu: f64) -> Result<(), Box<dyn std::error::Error>> {
        if gamma.is_nan() || gamma <= 0.0 {
            return Err(EvaluationError::InvalidHyperparameter { name: "gamma", value: gamma }.into());
        }
        if nu.is_nan() || nu <= 0.0 || nu > 1.0 {
            return Err(EvaluationError::InvalidHyperparameter { name: "nu", value: nu }.into());
        }
        if x.nrows() == 0 {
            return Err(EvaluationError::EmptyTrainingSet.into());
        }

        let mut model = Model {
            centroid: x.row_mean(),
            gamma,
            threshold: 0.0,
        };
        let mut scores: Vec<OrderedFloat<f64>> = (0..x.nrows())
            .map(|row| OrderedFloat(model.score(x, row)))
            .collect();
        scores.sort();
        let outliers = ((nu * x.nrows() as f64).floor() as usize).min(x.nrows() - 1);
        model.threshold = scores[outliers].0;

        self.logger.info(&format!(
            "Fitted on {} x {} (gamma={}, nu={}, threshold={:.6})",
            x.nrows(),
            x.ncols(),
            gamma,
            nu,
            model.threshold
        ))?;
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &DMatrix<f32>) -> Result<Vec<Label>, Box<dyn std::error::Error>> {
        let model = self.model.as_ref().ok_or(EvaluationError::ClassifierNotFitted)?;
        if x.ncols() != model.centroid.len() {
            return Err(EvaluationError::FeatureDimensionMismatch {
                row: 0,
                expected: model.centroid.len(),
                actual: x.ncols(),
            }
            .into());
        }

        Ok((0..x.nrows())
            .map(|row| {
                if model.score(x, row) < model.threshold {
                    Label::Anomaly
                } else {
                    Label::Normal
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn classifier() -> OneClassRbfCentroid {
        OneClassRbfCentroid::new(Arc::new(LoggerConsole::new(
            chrono::FixedOffset::east_opt(0).unwrap(),
        )))
    }

    fn line(values: &[f32]) -> DMatrix<f32> {
        DMatrix::from_column_slice(values.len(), 1, values)
    }

    #[test]
    fn test_far_samples_are_anomalies() {
        let mut classifier = classifier();
        let train = line(&[-0.2, -0.1, 0.0, 0.1, 0.2, -0.15, 0.15, 0.05, -0.05, 0.0]);

        classifier.fit(&train, 1.0, 0.1).unwrap();
        let predicted = classifier.predict(&line(&[0.0, 5.0, -6.0])).unwrap();

        assert_eq!(predicted, vec![Label::Normal, Label::Anomaly, Label::Anomaly]);
    }

    #[test]
    fn test_nu_bounds_training_outliers() {
        let mut classifier = classifier();
        let train = line(&(0..100).map(|i| i as f32 / 10.0).collect::<Vec<_>>());

        classifier.fit(&train, 0.1, 0.2).unwrap();
        let outliers = classifier
            .predict(&train)
            .unwrap()
            .into_iter()
            .filter(|label| *label == Label::Anomaly)
            .count();

        assert!(outliers <= 20, "{} outliers", outliers);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        assert!(classifier().predict(&line(&[1.0])).is_err());
    }

    #[test]
    fn test_invalid_hyperparameters_are_rejected() {
        let mut classifier = classifier();
        let train = line(&[0.0, 1.0]);

        assert!(classifier.fit(&train, 0.0, 0.1).is_err());
        assert!(classifier.fit(&train, 1.0, 1.5).is_err());
    }
}
