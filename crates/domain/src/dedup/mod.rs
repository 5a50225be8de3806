pub mod engine;
pub mod similarity;
