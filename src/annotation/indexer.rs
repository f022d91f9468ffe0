use crate::error::EvaluationError;
use std::ops::Range;

/// Maps pixel columns of a frame onto sample indices of the flattened
/// label vector. Sample `i` of a frame covers pixels `[i * cell_width, (i + 1) * cell_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationIndexer {
    cell_width: u32,
    samples_per_frame: usize,
}

impl AnnotationIndexer {
    pub fn new(cell_width: u32, samples_per_frame: usize) -> Result<Self, EvaluationError> {
        if cell_width == 0 {
            return Err(EvaluationError::InvalidGeometry("cell width is zero"));
        }
        if samples_per_frame == 0 {
            return Err(EvaluationError::InvalidGeometry("samples per frame is zero"));
        }

        Ok(Self {
            cell_width,
            samples_per_frame,
        })
    }

    pub fn samples_per_frame(&self) -> usize {
        self.samples_per_frame
    }

    /// Sample range within one frame. The cell containing `x_end` is
    /// included; the trailing partial cell dropped by the feature extractor
    /// is not, so the range may come out empty.
    pub fn frame_range(&self, x_start: u32, x_end: u32) -> Range<usize> {
        let start = (x_start / self.cell_width) as usize;
        let end = self
            .samples_per_frame
            .min((x_end / self.cell_width) as usize + 1);

        if start >= end {
            return end..end;
        }
        start..end
    }

    /// Range in the flattened vector for the frame at `frame_position`.
    pub fn absolute_range(&self, frame_position: usize, x_start: u32, x_end: u32) -> Range<usize> {
        let offset = frame_position * self.samples_per_frame;
        let range = self.frame_range(x_start, x_end);
        offset + range.start..offset + range.end
    }
}
