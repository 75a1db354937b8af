//! doggo-discriminator - a minimal labeling utility
//!
//! Fetches dog images from a remote source, lets a human assign a
//! categorical label, and appends the labeled results to a JSONL file.

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod render;
pub mod session;
pub mod sink;
pub mod source;

pub use error::{LabelError, Result};
