use crate::error::EvaluationError;
use crate::scaler::interface::Scaler;
use nalgebra::{DMatrix, RowDVector};

/// Scales every feature column to mean 0, standard deviation 1 using the
/// statistics of the fitted matrix. Constant columns are only centered.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    mean: Option<RowDVector<f32>>,
    std: Option<RowDVector<f32>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scaler for StandardScaler {
    fn fit(&mut self, x: &DMatrix<f32>) -> Result<(), Box<dyn std::error::Error>> {
        if x.nrows() == 0 {
            return Err(EvaluationError::EmptyTrainingSet.into());
        }
        let mean = x.row_mean();
        let std = x.row_variance().map(|variance| {
            let std = variance.sqrt();
            if std > f32::EPSILON {
                std
            } else {
                1.0
            }
        });
        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    fn transform(&self, x: &DMatrix<f32>) -> Result<DMatrix<f32>, Box<dyn std::error::Error>> {
        let (Some(mean), Some(std)) = (&self.mean, &self.std) else {
            return Err("StandardScaler used before fit".into());
        };
        if x.ncols() != mean.len() {
            return Err(EvaluationError::FeatureDimensionMismatch {
                row: 0,
                expected: mean.len(),
                actual: x.ncols(),
            }
            .into());
        }

        let mut scaled = x.clone();
        for mut row in scaled.row_iter_mut() {
            row -= mean;
            row.component_div_assign(std);
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_columns_have_zero_mean_unit_std() {
        let x = DMatrix::from_row_slice(4, 2, &[1.0, 10.0, 2.0, 10.0, 3.0, 10.0, 4.0, 10.0]);
        let mut scaler = StandardScaler::new();

        scaler.fit(&x).unwrap();
        let scaled = scaler.transform(&x).unwrap();

        let column = scaled.column(0);
        assert!(column.mean().abs() < 1e-6);
        assert!((column.variance() - 1.0).abs() < 1e-5);
        // constant column is centered, not blown up
        assert!(scaled.column(1).iter().all(|v| v.abs() < 1e-6));
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let scaler = StandardScaler::new();

        assert!(scaler.transform(&DMatrix::zeros(1, 1)).is_err());
    }
}
