use crate::annotation::labels::GroundTruth;
use crate::error::EvaluationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Label {
    #[default]
    Normal,
    Anomaly,
}

/// Frames with at least one false positive out of all evaluated frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFalsePositives {
    pub fp_frames: usize,
    pub total_frames: usize,
}

impl FrameFalsePositives {
    pub fn percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        self.fp_frames as f64 / self.total_frames as f64 * 100.0
    }
}

/// Result of one classifier run on the test set.
///
/// Recalls with an empty denominator (no anomaly samples, no anomaly ids)
/// are reported as 1.0: nothing to find means nothing was missed.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub tp_samples: usize,
    pub anomaly_samples: usize,
    pub recall: f64,
    pub fp_frames: usize,
    pub total_frames: usize,
    pub fp_frames_percentage: f64,
    pub tp_anomaly_level: usize,
    pub anomaly_count: usize,
    pub recall_anomaly_level: f64,
}

fn ratio_or_vacuous(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn frame_count(len: usize, samples_per_frame: usize, context: &'static str) -> Result<usize, EvaluationError> {
    if samples_per_frame == 0 {
        return Err(EvaluationError::InvalidGeometry("samples per frame is zero"));
    }
    if len % samples_per_frame != 0 {
        return Err(EvaluationError::LengthMismatch {
            context,
            expected: (len / samples_per_frame + 1) * samples_per_frame,
            actual: len,
        });
    }
    Ok(len / samples_per_frame)
}

/// False-positive frames on data with no true anomalies.
pub fn false_positive_frames(
    predicted: &[Label],
    samples_per_frame: usize,
) -> Result<FrameFalsePositives, EvaluationError> {
    let total_frames = frame_count(predicted.len(), samples_per_frame, "normal predictions")?;
    let fp_frames = predicted
        .chunks(samples_per_frame)
        .filter(|frame| frame.contains(&Label::Anomaly))
        .count();

    Ok(FrameFalsePositives {
        fp_frames,
        total_frames,
    })
}

pub fn evaluate(
    normal_predicted: &[Label],
    anomaly_predicted: &[Label],
    truth: &GroundTruth,
) -> Result<Metrics, EvaluationError> {
    let n = truth.samples_per_frame;
    if anomaly_predicted.len() != truth.labels.len() {
        return Err(EvaluationError::LengthMismatch {
            context: "anomaly predictions",
            expected: truth.labels.len(),
            actual: anomaly_predicted.len(),
        });
    }
    let normal = false_positive_frames(normal_predicted, n)?;
    let anomaly_frames = frame_count(truth.labels.len(), n, "ground truth")?;

    let tp_samples = truth
        .labels
        .iter()
        .zip(anomaly_predicted)
        .filter(|(expected, predicted)| **expected == Label::Anomaly && **predicted == Label::Anomaly)
        .count();
    let anomaly_samples = truth.anomaly_sample_count();

    let anomaly_fp_frames = (0..anomaly_frames)
        .filter(|frame| {
            (frame * n..(frame + 1) * n).any(|index| {
                anomaly_predicted[index] == Label::Anomaly
                    && truth.labels[index] == Label::Normal
                    && !truth.unclear.contains(&index)
            })
        })
        .count();

    let tp_anomaly_level = truth
        .anomalies
        .iter()
        .filter(|(_, indices)| {
            indices
                .iter()
                .any(|index| anomaly_predicted[*index] == Label::Anomaly)
        })
        .count();

    let frames = FrameFalsePositives {
        fp_frames: normal.fp_frames + anomaly_fp_frames,
        total_frames: normal.total_frames + anomaly_frames,
    };

    Ok(Metrics {
        tp_samples,
        anomaly_samples,
        recall: ratio_or_vacuous(tp_samples, anomaly_samples),
        fp_frames: frames.fp_frames,
        total_frames: frames.total_frames,
        fp_frames_percentage: frames.percentage(),
        tp_anomaly_level,
        anomaly_count: truth.anomalies.len(),
        recall_anomaly_level: ratio_or_vacuous(tp_anomaly_level, truth.anomalies.len()),
    })
}
