use crate::annotation::model::FrameId;
use std::collections::HashMap;

/// Position lookup over an ordered frame sequence, built once.
#[derive(Debug, Clone)]
pub struct FrameIndex {
    positions: HashMap<FrameId, usize>,
    len: usize,
}

impl FrameIndex {
    pub fn new(frames: &[FrameId]) -> Self {
        let mut positions = HashMap::with_capacity(frames.len());
        for (position, frame) in frames.iter().enumerate() {
            // first occurrence wins
            positions.entry(*frame).or_insert(position);
        }

        Self {
            positions,
            len: frames.len(),
        }
    }

    pub fn position(&self, frame: FrameId) -> Option<usize> {
        self.positions.get(&frame).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
