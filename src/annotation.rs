pub mod frame_index;
pub mod impl_fake;
pub mod indexer;
pub mod interface;
pub mod labels;
pub mod model;
