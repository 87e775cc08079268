//! Batch VP9/WebM converter — reconcile a directory's conversion state, then encode what is missing.

pub mod cli;
pub mod config;
pub mod convert;
pub mod media;
