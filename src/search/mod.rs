//! Doctor search module
//!
//! Resolves a query to a cached or freshly generated population,
//! then filters and ranks it by distance.

mod executor;
mod models;
mod service;

pub use executor::{rank, DoctorSearch};
pub use models::*;
pub use service::{DoctorDetailsResponse, SearchDoctorsResponse};
