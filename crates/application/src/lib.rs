#![forbid(unsafe_code)]

pub mod batch_pipeline;
pub mod ingest;
