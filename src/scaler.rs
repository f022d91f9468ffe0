pub mod impl_standard;
pub mod interface;
