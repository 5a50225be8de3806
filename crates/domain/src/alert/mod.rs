pub mod entity;
pub mod error;
pub mod features;
pub mod normalize;
