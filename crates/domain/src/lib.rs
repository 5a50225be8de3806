#![forbid(unsafe_code)]

pub mod alert;
pub mod common;
pub mod dedup;
pub mod stats;
