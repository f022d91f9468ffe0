use nalgebra::DMatrix;

pub trait Scaler {
    fn fit(&mut self, x: &DMatrix<f32>) -> Result<(), Box<dyn std::error::Error>>;
    fn transform(&self, x: &DMatrix<f32>) -> Result<DMatrix<f32>, Box<dyn std::error::Error>>;
}
