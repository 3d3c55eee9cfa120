//! Doctor record types
//!
//! Defines the synthetic doctor profile and the per-query search result that wraps it.

mod types;

pub use types::*;
