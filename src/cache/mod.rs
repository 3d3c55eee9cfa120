//! Caching module for MedFinder
//!
//! Holds generated doctor populations keyed by query signature, with a
//! time-to-live measured against an injectable clock.

use crate::doctors::DoctorRecord;
use crate::generator::GenerationError;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default population lifetime in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cache key built from the parts of a query that shape its population
///
/// Rating and free-text filters are deliberately not part of the key.
/// Coordinates and distance are compared by bit pattern, with `-0.0`
/// folded into `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuerySignature {
    latitude: u64,
    longitude: u64,
    specialty: String,
    max_distance_km: u64,
    city_hint: String,
}

impl QuerySignature {
    pub fn new(
        latitude: f64,
        longitude: f64,
        specialty: &str,
        max_distance_km: f64,
        city_hint: &str,
    ) -> Self {
        Self {
            latitude: key_bits(latitude),
            longitude: key_bits(longitude),
            specialty: specialty.to_string(),
            max_distance_km: key_bits(max_distance_km),
            city_hint: city_hint.to_string(),
        }
    }

    pub fn latitude(&self) -> f64 {
        f64::from_bits(self.latitude)
    }

    pub fn longitude(&self) -> f64 {
        f64::from_bits(self.longitude)
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn max_distance_km(&self) -> f64 {
        f64::from_bits(self.max_distance_km)
    }

    pub fn city_hint(&self) -> &str {
        &self.city_hint
    }
}

fn key_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

impl fmt::Display for QuerySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.latitude(),
            self.longitude(),
            self.specialty,
            self.max_distance_km(),
            self.city_hint
        )
    }
}

/// A generated population and when it was created
#[derive(Debug, Clone)]
pub struct CachedPopulation {
    pub signature: QuerySignature,
    pub doctors: Arc<Vec<DoctorRecord>>,
    pub created_at: DateTime<Utc>,
}

impl CachedPopulation {
    /// Still usable at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at < ttl
    }
}

/// How a population was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Reused a fresh entry
    Hit,
    /// No entry existed for the signature
    Miss,
    /// An entry existed but had outlived the TTL
    Expired,
}

/// Populations keyed by query signature
///
/// Entries are never evicted. Expired ones stay visible to [`find`](Self::find)
/// until the same signature is queried again and overwrites them.
pub struct PopulationCache {
    entries: Mutex<HashMap<QuerySignature, CachedPopulation>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl PopulationCache {
    /// Create a cache on the system clock
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_clock(ttl_seconds, Arc::new(SystemClock))
    }

    /// Create a cache on a custom clock
    pub fn with_clock(ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QuerySignature, CachedPopulation>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the fresh population for `signature`, generating one if needed
    ///
    /// The check, the generation and the store happen under one lock, so two
    /// concurrent misses on the same signature cannot both generate. A failed
    /// generation leaves the cache untouched.
    pub fn get_or_generate<F>(
        &self,
        signature: &QuerySignature,
        generate: F,
    ) -> Result<(Arc<Vec<DoctorRecord>>, CacheStatus), GenerationError>
    where
        F: FnOnce() -> Result<Vec<DoctorRecord>, GenerationError>,
    {
        let mut entries = self.entries();
        let now = self.clock.now();

        let status = match entries.get(signature) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                return Ok((entry.doctors.clone(), CacheStatus::Hit));
            }
            Some(_) => CacheStatus::Expired,
            None => CacheStatus::Miss,
        };

        let doctors = Arc::new(generate()?);
        entries.insert(
            signature.clone(),
            CachedPopulation {
                signature: signature.clone(),
                doctors: doctors.clone(),
                created_at: now,
            },
        );

        Ok((doctors, status))
    }

    /// Find a record by id in any entry, expired or not
    pub fn find(&self, id: &str) -> Option<DoctorRecord> {
        self.entries()
            .values()
            .flat_map(|entry| entry.doctors.iter())
            .find(|doctor| doctor.id == id)
            .cloned()
    }

    /// Snapshot of one entry
    pub fn get(&self, signature: &QuerySignature) -> Option<CachedPopulation> {
        self.entries().get(signature).cloned()
    }

    /// Number of stored entries, expired included
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for PopulationCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECONDS)
    }
}
