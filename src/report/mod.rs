pub mod generator;
pub mod narrative;
