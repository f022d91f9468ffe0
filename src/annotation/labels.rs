use crate::annotation::frame_index::FrameIndex;
use crate::annotation::indexer::AnnotationIndexer;
use crate::annotation::model::AnnotationSet;
use crate::error::EvaluationError;
use crate::metrics::Label;
use std::collections::{BTreeMap, BTreeSet};

/// Sample indices of the anomaly-frame block grouped by anomaly id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnomalyGroups {
    groups: BTreeMap<String, BTreeSet<usize>>,
}

impl AnomalyGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, anomaly_id: &str) -> Option<&BTreeSet<usize>> {
        self.groups.get(anomaly_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.groups
            .iter()
            .map(|(anomaly_id, indices)| (anomaly_id.as_str(), indices))
    }
}

#[derive(Debug, Default)]
struct AnomalyGroupsBuilder {
    groups: BTreeMap<String, BTreeSet<usize>>,
}

impl AnomalyGroupsBuilder {
    fn insert(&mut self, anomaly_id: &str, index: usize) {
        self.groups
            .entry(anomaly_id.to_string())
            .or_default()
            .insert(index);
    }

    fn build(self) -> AnomalyGroups {
        AnomalyGroups {
            groups: self.groups,
        }
    }
}

/// Ground truth for the anomaly-frame test block, shared read-only by every
/// classifier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTruth {
    pub labels: Vec<Label>,
    pub anomalies: AnomalyGroups,
    /// Indices inside unclear regions, ignored for false positives.
    pub unclear: BTreeSet<usize>,
    pub samples_per_frame: usize,
}

impl GroundTruth {
    pub fn anomaly_sample_count(&self) -> usize {
        self.labels.iter().filter(|l| **l == Label::Anomaly).count()
    }
}

pub struct LabelSynthesizer {
    indexer: AnnotationIndexer,
}

impl LabelSynthesizer {
    pub fn new(indexer: AnnotationIndexer) -> Self {
        Self { indexer }
    }

    pub fn synthesize(&self, annotations: &AnnotationSet) -> Result<GroundTruth, EvaluationError> {
        let frame_index = FrameIndex::new(&annotations.anomaly_frames);
        let samples_per_frame = self.indexer.samples_per_frame();

        // Only the annotated part of an anomaly frame is anomalous.
        let mut labels = vec![Label::Normal; frame_index.len() * samples_per_frame];
        let mut anomalies = AnomalyGroupsBuilder::default();

        for region in &annotations.anomaly_regions {
            if region.x_start > region.x_end {
                return Err(EvaluationError::InvalidRegion {
                    frame: region.frame,
                    x_start: region.x_start,
                    x_end: region.x_end,
                });
            }
            let position = frame_index
                .position(region.frame)
                .ok_or(EvaluationError::UnknownAnomalyFrame {
                    frame: region.frame,
                })?;

            for index in self
                .indexer
                .absolute_range(position, region.x_start, region.x_end)
            {
                labels[index] = Label::Anomaly;
                anomalies.insert(&region.anomaly_id, index);
            }
        }

        let mut unclear = BTreeSet::new();
        for region in &annotations.unclear_regions {
            // unclear regions may point at frames outside the test set
            let Some(position) = frame_index.position(region.frame) else {
                continue;
            };
            unclear.extend(
                self.indexer
                    .absolute_range(position, region.x_start, region.x_end),
            );
        }

        Ok(GroundTruth {
            labels,
            anomalies: anomalies.build(),
            unclear,
            samples_per_frame,
        })
    }
}
