//! Procedural doctor generator
//!
//! Builds a randomized population of doctor records scattered around an anchor.
//! There is no external data source; everything comes from the fixed lists in
//! [`super::catalog`] and the generator's random source.

use super::catalog::*;
use super::traits::{CandidateSource, GenerationError, GenerationRequest};
use crate::doctors::{Availability, DoctorRecord};
use crate::geo::{resolve_city, round_to};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Random doctor generator with an injectable random source
pub struct SyntheticGenerator {
    rng: Mutex<StdRng>,
    population_size: usize,
}

impl SyntheticGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator around an existing random source
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            population_size: POPULATION_SIZE,
        }
    }

    /// Set the number of records per population
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    fn doctor<R: Rng>(
        rng: &mut R,
        position: usize,
        request: &GenerationRequest<'_>,
        city: &str,
    ) -> DoctorRecord {
        let specialty = match request.specialty {
            Some(specialty) => specialty.to_string(),
            None => pick(rng, &SPECIALTIES).to_string(),
        };
        let experience_years = rng.gen_range(EXPERIENCE_RANGE.0..=EXPERIENCE_RANGE.1);

        let latitude = request.anchor.latitude
            + rng.gen_range(-COORDINATE_SPREAD..=COORDINATE_SPREAD);
        let longitude = request.anchor.longitude
            + rng.gen_range(-COORDINATE_SPREAD..=COORDINATE_SPREAD);

        let availability = if rng.gen_bool(AVAILABLE_PROBABILITY) {
            Availability::Available
        } else {
            Availability::Busy
        };

        let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

        DoctorRecord {
            id: format!("doc-{}", id.simple()),
            name: format!("Dr. {} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES)),
            rating: round_to(rng.gen_range(RATING_RANGE.0..=RATING_RANGE.1), 1),
            review_count: rng.gen_range(REVIEW_COUNT_RANGE.0..=REVIEW_COUNT_RANGE.1),
            experience_years,
            phone: format!(
                "+91-{}-{}",
                rng.gen_range(90000..=99999),
                rng.gen_range(10000..=99999)
            ),
            email: format!("info@hospital{}.com", position + 1),
            hospital: pick(rng, &HOSPITALS).to_string(),
            address: format!(
                "{} {}, {}",
                rng.gen_range(1..=999),
                pick(rng, &AREAS),
                city
            ),
            latitude: round_to(latitude, COORDINATE_DECIMALS),
            longitude: round_to(longitude, COORDINATE_DECIMALS),
            availability,
            consultation_fee: rng.gen_range(FEE_RANGE.0..=FEE_RANGE.1),
            languages: sample(rng, &LANGUAGES, LANGUAGE_COUNT),
            education: format!("MD from {}", pick(rng, &MEDICAL_SCHOOLS)),
            certifications: sample(rng, &CERTIFICATIONS, CERTIFICATION_COUNT),
            bio: format!(
                "Experienced {} specialist with {} years of practice. \
                 Committed to providing excellent patient care.",
                specialty.to_lowercase(),
                experience_years
            ),
            services: sample(rng, &SERVICES, SERVICE_COUNT),
            specialty,
        }
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for SyntheticGenerator {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<Vec<DoctorRecord>, GenerationError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let city = resolve_city(&request.anchor, request.city_hint);
        debug!(
            "Generating {} doctors around ({}, {}) in {}",
            self.population_size, request.anchor.latitude, request.anchor.longitude, city
        );

        Ok((0..self.population_size)
            .map(|position| Self::doctor(&mut *rng, position, request, &city))
            .collect())
    }
}

fn pick<'a, R: Rng>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or_default()
}

/// Draw between `count.0` and `count.1` distinct entries
fn sample<R: Rng>(rng: &mut R, list: &[&str], count: (usize, usize)) -> Vec<String> {
    let n = rng.gen_range(count.0..=count.1);
    list.choose_multiple(rng, n).map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{haversine_km, Coordinates};
    use std::collections::HashSet;

    fn hyderabad() -> Coordinates {
        Coordinates::new(17.385, 78.4867)
    }

    fn no_duplicates(list: &[String]) -> bool {
        list.iter().collect::<HashSet<_>>().len() == list.len()
    }

    #[test]
    fn test_population_size() {
        let generator = SyntheticGenerator::seeded(1);
        let doctors = generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        assert_eq!(doctors.len(), POPULATION_SIZE);

        let generator = SyntheticGenerator::seeded(1).with_population_size(3);
        let doctors = generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        assert_eq!(doctors.len(), 3);
    }

    #[test]
    fn test_recovers_from_poisoned_rng() {
        let generator = SyntheticGenerator::seeded(1);
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = generator.rng.lock().unwrap();
            panic!("holder died");
        }));
        assert!(generator.rng.is_poisoned());

        let doctors = generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        assert_eq!(doctors.len(), POPULATION_SIZE);
    }

    #[test]
    fn test_record_ranges() {
        let generator = SyntheticGenerator::seeded(7);
        let anchor = hyderabad();

        for _ in 0..8 {
            for doctor in generator.generate(&GenerationRequest::new(anchor)).unwrap() {
                assert!((3.8..=4.9).contains(&doctor.rating), "rating {}", doctor.rating);
                assert!((25..=500).contains(&doctor.review_count));
                assert!((8..=35).contains(&doctor.experience_years));
                assert!((800..=2500).contains(&doctor.consultation_fee));

                assert!((doctor.latitude - anchor.latitude).abs() <= 0.1 + 1e-6);
                assert!((doctor.longitude - anchor.longitude).abs() <= 0.1 + 1e-6);
                assert!(haversine_km(
                    anchor.latitude,
                    anchor.longitude,
                    doctor.latitude,
                    doctor.longitude
                ) < 16.0);

                assert!((2..=4).contains(&doctor.languages.len()));
                assert!((2..=4).contains(&doctor.certifications.len()));
                assert!((4..=7).contains(&doctor.services.len()));
                assert!(no_duplicates(&doctor.languages));
                assert!(no_duplicates(&doctor.certifications));
                assert!(no_duplicates(&doctor.services));

                assert!(doctor.name.starts_with("Dr. "));
                assert!(doctor.phone.starts_with("+91-"));
                assert!(doctor.education.starts_with("MD from "));
                assert!(SPECIALTIES.contains(&doctor.specialty.as_str()));
            }
        }
    }

    #[test]
    fn test_coordinates_rounded_to_six_decimals() {
        let generator = SyntheticGenerator::seeded(3);
        for doctor in generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap()
        {
            assert_eq!(doctor.latitude, round_to(doctor.latitude, 6));
            assert_eq!(doctor.longitude, round_to(doctor.longitude, 6));
        }
    }

    #[test]
    fn test_requested_specialty_applies_to_all() {
        let generator = SyntheticGenerator::seeded(11);
        let request = GenerationRequest::new(hyderabad()).specialty("Cardiology");
        let doctors = generator.generate(&request).unwrap();

        assert!(doctors.iter().all(|d| d.specialty == "Cardiology"));
        assert!(doctors
            .iter()
            .all(|d| d.bio.starts_with("Experienced cardiology specialist")));
    }

    #[test]
    fn test_city_resolution_in_address() {
        let generator = SyntheticGenerator::seeded(5);

        let doctors = generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        assert!(doctors
            .iter()
            .all(|d| d.address.ends_with(", Hyderabad, Telangana")));

        let request = GenerationRequest::new(hyderabad()).city_hint("Warangal");
        let doctors = generator.generate(&request).unwrap();
        assert!(doctors.iter().all(|d| d.address.ends_with(", Warangal")));
    }

    #[test]
    fn test_ids_unique_and_reproducible() {
        let first = SyntheticGenerator::seeded(42)
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        let second = SyntheticGenerator::seeded(42)
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();

        assert_eq!(first, second);

        let ids: HashSet<_> = first.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), first.len());
        assert!(first.iter().all(|d| d.id.starts_with("doc-")));
    }

    #[test]
    fn test_emails_follow_batch_position() {
        let doctors = SyntheticGenerator::seeded(9)
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        assert_eq!(doctors[0].email, "info@hospital1.com");
        assert_eq!(doctors[24].email, "info@hospital25.com");
    }

    #[test]
    fn test_availability_mix() {
        let generator = SyntheticGenerator::seeded(21).with_population_size(400);
        let doctors = generator
            .generate(&GenerationRequest::new(hyderabad()))
            .unwrap();
        let available = doctors
            .iter()
            .filter(|d| d.availability == Availability::Available)
            .count();

        // 75% expected; wide bounds keep this stable across seeds
        assert!((240..=360).contains(&available), "available {}", available);
    }
}
