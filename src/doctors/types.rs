//! Doctor record type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A synthetic doctor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    /// Unique token, stable while its cache entry lives
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Rating in [3.8, 4.9], one decimal
    pub rating: f64,
    /// Number of reviews in [25, 500]
    pub review_count: u32,
    /// Years of practice in [8, 35]
    pub experience_years: u32,
    pub phone: String,
    pub email: String,
    pub hospital: String,
    pub address: String,
    /// Latitude, rounded to 6 decimals
    pub latitude: f64,
    /// Longitude, rounded to 6 decimals
    pub longitude: f64,
    pub availability: Availability,
    /// Consultation fee in [800, 2500]
    pub consultation_fee: u32,
    pub languages: Vec<String>,
    pub education: String,
    pub certifications: Vec<String>,
    pub bio: String,
    pub services: Vec<String>,
}

impl DoctorRecord {
    /// Case-insensitive specialty comparison
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty.to_lowercase() == specialty.to_lowercase()
    }

    /// Check whether a lowercased term occurs in any of the searchable text fields
    pub fn matches_term(&self, term_lower: &str) -> bool {
        [
            &self.name,
            &self.specialty,
            &self.hospital,
            &self.address,
            &self.bio,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term_lower))
    }
}

/// Current availability of a doctor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Busy => write!(f, "Busy"),
        }
    }
}

/// A doctor record with its distance from the query anchor
///
/// Produced fresh for every query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub doctor: DoctorRecord,
    /// Kilometers from the anchor, one decimal
    pub distance: f64,
}

impl SearchResult {
    pub fn new(doctor: DoctorRecord, distance: f64) -> Self {
        Self { doctor, distance }
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> DoctorRecord {
    DoctorRecord {
        id: "doc-test".to_string(),
        name: "Dr. Priya Reddy".to_string(),
        specialty: "Cardiology".to_string(),
        rating: 4.5,
        review_count: 120,
        experience_years: 14,
        phone: "+91-91234-56789".to_string(),
        email: "info@hospital1.com".to_string(),
        hospital: "Apollo Hospitals".to_string(),
        address: "42 Banjara Hills, Hyderabad, Telangana".to_string(),
        latitude: 17.4,
        longitude: 78.45,
        availability: Availability::Available,
        consultation_fee: 1200,
        languages: vec!["English".to_string(), "Telugu".to_string()],
        education: "MD from AIIMS".to_string(),
        certifications: vec!["MBBS".to_string(), "MD".to_string()],
        bio: "Experienced cardiology specialist with 14 years of practice.".to_string(),
        services: vec!["General Consultation".to_string()],
    }
}
