//! HTTP request handlers

use super::state::AppState;
use crate::config::SearchSettings;
use crate::search::{DoctorQuery, SearchDoctorsResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// Body of a doctor search request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub specialty: Option<String>,
    /// Maximum distance in kilometers
    pub max_distance: Option<f64>,
    pub min_rating: Option<f64>,
    pub search_term: Option<String>,
    pub search_city: Option<String>,
}

impl SearchParams {
    /// Fill defaults and reject values the search cannot handle
    pub fn into_query(self, defaults: &SearchSettings) -> Result<DoctorQuery, String> {
        let latitude = self.latitude.unwrap_or(defaults.default_latitude);
        let longitude = self.longitude.unwrap_or(defaults.default_longitude);
        let max_distance = self.max_distance.unwrap_or(defaults.default_max_distance);
        let min_rating = self.min_rating.unwrap_or(0.0);

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("Invalid latitude: {}", latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("Invalid longitude: {}", longitude));
        }
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(format!("Invalid max_distance: {}", max_distance));
        }
        if !min_rating.is_finite() || min_rating < 0.0 {
            return Err(format!("Invalid min_rating: {}", min_rating));
        }

        Ok(DoctorQuery::new(latitude, longitude)
            .with_specialty(self.specialty.unwrap_or_default())
            .with_max_distance(max_distance)
            .with_min_rating(min_rating)
            .with_search_term(self.search_term.unwrap_or_default())
            .with_city(self.search_city.unwrap_or_default()))
    }
}

/// Doctor search handler
pub async fn search_doctors(
    State(state): State<AppState>,
    Json(params): Json<SearchParams>,
) -> Response {
    let query = match params.into_query(&state.settings.search) {
        Ok(query) => query,
        Err(message) => {
            warn!("Rejected doctor search: {}", message);
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchDoctorsResponse::failure(message)),
            )
                .into_response();
        }
    };

    debug!(
        "Searching doctors: lat={}, lon={}, specialty={:?}, city={:?}",
        query.anchor.latitude, query.anchor.longitude, query.specialty, query.city_hint
    );

    let response = state.search.search_doctors(&query);
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(response)).into_response()
}

/// Doctor details handler
pub async fn doctor_details(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let response = state.search.doctor_details(&id);
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Json(response)).into_response()
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}

/// Stats handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "metrics": state.search.metrics().snapshot(),
        "cache_entries": state.search.cache().len(),
        "cache_ttl_seconds": state.search.cache().ttl().num_seconds(),
    }))
}
