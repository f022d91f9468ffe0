use crate::metrics::Label;
use nalgebra::DMatrix;

/// One-class model trained on normal samples only. `fit` replaces any
/// previous model.
pub trait OneClassClassifier {
    fn fit(&mut self, x: &DMatrix<f32>, gamma: f64, nu: f64) -> Result<(), Box<dyn std::error::Error>>;
    fn predict(&self, x: &DMatrix<f32>) -> Result<Vec<Label>, Box<dyn std::error::Error>>;
}
