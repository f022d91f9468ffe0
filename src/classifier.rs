pub mod impl_rbf_centroid;
pub mod interface;
