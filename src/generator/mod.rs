//! Candidate generation module
//!
//! Defines the CandidateSource trait and the synthetic doctor generator behind it.

pub mod catalog;
mod synthetic;
mod traits;

pub use synthetic::SyntheticGenerator;
pub use traits::*;
