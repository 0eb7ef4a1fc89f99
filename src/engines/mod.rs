pub mod similarity;
pub mod generation;
