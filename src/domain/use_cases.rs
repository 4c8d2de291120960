pub mod applications;
pub mod extractors;
