use crate::annotation::model::FrameId;
use crate::error::EvaluationError;
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Scaled feature matrices of one evaluation run, rows = samples.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    pub train: DMatrix<f32>,
    pub normal_test: DMatrix<f32>,
    pub anomaly_test: DMatrix<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalSplit {
    pub train: Vec<FrameId>,
    pub test: Vec<FrameId>,
}

/// Shuffles the normal frames with `seed` and holds out `test_count` of them.
/// The remaining frames keep their recording order.
pub fn split_normal_frames(
    normal_frames: &[FrameId],
    test_count: usize,
    seed: u64,
) -> Result<NormalSplit, EvaluationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shuffled = normal_frames.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled.truncate(test_count);

    let held_out: HashSet<FrameId> = shuffled.iter().copied().collect();
    let mut seen = HashSet::new();
    let train: Vec<FrameId> = normal_frames
        .iter()
        .copied()
        .filter(|frame| !held_out.contains(frame) && seen.insert(*frame))
        .collect();

    if train.is_empty() {
        return Err(EvaluationError::EmptyTrainingSet);
    }

    Ok(NormalSplit {
        train,
        test: shuffled,
    })
}

pub fn samples_per_frame(rows: usize, frames: usize) -> Result<usize, EvaluationError> {
    if frames == 0 {
        return Err(EvaluationError::EmptyTrainingSet);
    }
    if rows % frames != 0 || rows == 0 {
        return Err(EvaluationError::UnevenSamplePartition { rows, frames });
    }
    Ok(rows / frames)
}

/// Stacks per-sample feature vectors into a samples x features matrix.
pub fn to_matrix(samples: &[Vec<f32>]) -> Result<DMatrix<f32>, EvaluationError> {
    let feature_count = samples.first().map_or(0, Vec::len);
    for (row, sample) in samples.iter().enumerate() {
        if sample.len() != feature_count {
            return Err(EvaluationError::FeatureDimensionMismatch {
                row,
                expected: feature_count,
                actual: sample.len(),
            });
        }
    }

    Ok(DMatrix::from_fn(samples.len(), feature_count, |row, col| {
        samples[row][col]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_holds_out_requested_count_deterministically() {
        let normal: Vec<FrameId> = (0..20).collect();

        let first = split_normal_frames(&normal, 5, 42).unwrap();
        let second = split_normal_frames(&normal, 5, 42).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.test.len(), 5);
        assert_eq!(first.train.len(), 15);
        assert!(first.train.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(first.test.iter().all(|frame| !first.train.contains(frame)));
    }

    #[test]
    fn test_split_without_training_frames_fails() {
        assert_eq!(
            split_normal_frames(&[1, 2, 3], 3, 42),
            Err(EvaluationError::EmptyTrainingSet)
        );
        assert_eq!(
            split_normal_frames(&[1, 2], 5, 42),
            Err(EvaluationError::EmptyTrainingSet)
        );
    }

    #[test]
    fn test_samples_per_frame_requires_even_partition() {
        assert_eq!(samples_per_frame(120, 3), Ok(40));
        assert_eq!(
            samples_per_frame(121, 3),
            Err(EvaluationError::UnevenSamplePartition {
                rows: 121,
                frames: 3
            })
        );
        assert_eq!(samples_per_frame(0, 0), Err(EvaluationError::EmptyTrainingSet));
    }

    #[test]
    fn test_to_matrix_keeps_row_layout() {
        let matrix = to_matrix(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();

        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(matrix[(1, 0)], 3.0);
        assert_eq!(matrix[(2, 1)], 6.0);
    }

    #[test]
    fn test_to_matrix_rejects_ragged_samples() {
        assert_eq!(
            to_matrix(&[vec![1.0, 2.0], vec![3.0]]),
            Err(EvaluationError::FeatureDimensionMismatch {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }
}
