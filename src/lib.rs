//! MedFinder: a local doctor finder server
//!
//! Serves nearby-doctor searches over a synthetic, procedurally generated
//! population that is cached per query signature.

pub mod cache;
pub mod config;
pub mod doctors;
pub mod generator;
pub mod geo;
pub mod metrics;
pub mod search;
pub mod web;

pub use config::Settings;
pub use doctors::{DoctorRecord, SearchResult};
pub use generator::{CandidateSource, SyntheticGenerator};
pub use search::{DoctorQuery, DoctorSearch, SearchError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
