//! Filesystem utilities.
//!
//! All output goes through atomic writes so an interrupted run never leaves
//! a truncated piece or JSON file behind.

pub mod atomic;

pub use atomic::{atomic_write_file, ensure_dir};
