//! Candidate source trait and error type

use crate::doctors::DoctorRecord;
use crate::geo::Coordinates;
use thiserror::Error;

/// Failure while producing a candidate population
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("candidate generation failed: {0}")]
pub struct GenerationError(pub String);

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Parameters for producing one population
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Point the population is generated around
    pub anchor: Coordinates,
    /// Specialty every record should carry, if any
    pub specialty: Option<&'a str>,
    /// City string to use instead of box classification
    pub city_hint: Option<&'a str>,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(anchor: Coordinates) -> Self {
        Self {
            anchor,
            specialty: None,
            city_hint: None,
        }
    }

    /// Set the specialty; empty strings are treated as absent
    pub fn specialty(mut self, specialty: &'a str) -> Self {
        self.specialty = Some(specialty).filter(|s| !s.is_empty());
        self
    }

    /// Set the city hint; empty strings are treated as absent
    pub fn city_hint(mut self, city: &'a str) -> Self {
        self.city_hint = Some(city).filter(|c| !c.is_empty());
        self
    }
}

/// A source of doctor records around an anchor point
///
/// The synthetic generator is the only implementation today; the trait leaves
/// room for a real directory lookup that can fail.
pub trait CandidateSource: Send + Sync {
    /// Source name, used in logs
    fn name(&self) -> &str;

    /// Produce a population for the request
    fn generate(&self, request: &GenerationRequest<'_>)
        -> Result<Vec<DoctorRecord>, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hints_are_absent() {
        let request = GenerationRequest::new(Coordinates::new(17.0, 78.0))
            .specialty("")
            .city_hint("");
        assert!(request.specialty.is_none());
        assert!(request.city_hint.is_none());

        let request = request.specialty("ENT").city_hint("Warangal");
        assert_eq!(request.specialty, Some("ENT"));
        assert_eq!(request.city_hint, Some("Warangal"));
    }
}
