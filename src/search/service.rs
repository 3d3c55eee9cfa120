//! Response-shaped entry points used by the HTTP layer

use super::executor::DoctorSearch;
use super::models::DoctorQuery;
use crate::doctors::{DoctorRecord, SearchResult};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::error;

/// Outcome of a doctor search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDoctorsResponse {
    pub success: bool,
    pub count: usize,
    pub doctors: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchDoctorsResponse {
    pub fn ok(doctors: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            count: doctors.len(),
            doctors,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: 0,
            doctors: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Outcome of a single-doctor lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDetailsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DoctorDetailsResponse {
    pub fn found(doctor: DoctorRecord) -> Self {
        Self {
            success: true,
            doctor: Some(doctor),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            doctor: None,
            error: Some(message.into()),
        }
    }
}

impl DoctorSearch {
    /// Search and wrap the outcome; never panics past this call
    pub fn search_doctors(&self, query: &DoctorQuery) -> SearchDoctorsResponse {
        match catch_unwind(AssertUnwindSafe(|| self.search(query))) {
            Ok(doctors) => SearchDoctorsResponse::ok(doctors),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Doctor search failed: {}", message);
                SearchDoctorsResponse::failure(message)
            }
        }
    }

    /// Look up one doctor and wrap the outcome
    pub fn doctor_details(&self, id: &str) -> DoctorDetailsResponse {
        match catch_unwind(AssertUnwindSafe(|| self.find_by_id(id))) {
            Ok(Ok(doctor)) => DoctorDetailsResponse::found(doctor),
            Ok(Err(e)) => DoctorDetailsResponse::failure(e.to_string()),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Doctor lookup failed: {}", message);
                DoctorDetailsResponse::failure(message)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}
