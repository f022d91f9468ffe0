pub type FrameId = u32;

/// Horizontal pixel range of an annotated anomaly on one frame.
///
/// Regions sharing an `anomaly_id` are the same real-world anomaly seen on
/// several frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyRegion {
    pub frame: FrameId,
    pub x_start: u32,
    pub x_end: u32,
    pub anomaly_id: String,
}

/// Ambiguous ground truth. False positives inside it are not counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclearRegion {
    pub frame: FrameId,
    pub x_start: u32,
    pub x_end: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    pub normal_frames: Vec<FrameId>,
    pub anomaly_frames: Vec<FrameId>,
    pub anomaly_regions: Vec<AnomalyRegion>,
    pub unclear_regions: Vec<UnclearRegion>,
}
