//! Configuration model for pingpong.
//!
//! This module defines the Config struct that represents an optional
//! `pingpong.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{BaseArticle, ExpertVoice};
