pub mod errors;
pub mod limits;
pub mod navigator;
pub mod preset;
