//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let server = state.settings.server.clone();

    let mut router = Router::new()
        // API routes
        .route("/api/search-doctors", post(handlers::search_doctors))
        .route("/api/doctor/:id", get(handlers::doctor_details))
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats));

    // Everything else is a static file
    if let Some(dir) = server.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    let mut router = router.layer(CompressionLayer::new()).with_state(state);

    if server.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PopulationCache;
    use crate::config::Settings;
    use crate::generator::SyntheticGenerator;
    use crate::search::{DoctorDetailsResponse, DoctorSearch, SearchDoctorsResponse};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let mut settings = Settings::default();
        settings.server.static_dir = None;

        let search = DoctorSearch::new(
            Arc::new(SyntheticGenerator::seeded(17)),
            PopulationCache::default(),
        );
        create_router(AppState::with_search(settings, search))
    }

    fn search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/search-doctors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let response = app()
            .oneshot(search_request(
                r#"{"latitude": 17.385, "longitude": 78.4867, "specialty": "Cardiology", "max_distance": 10}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: SearchDoctorsResponse = read_json(response).await;
        assert!(body.success);
        assert_eq!(body.count, body.doctors.len());
        assert!(body
            .doctors
            .iter()
            .all(|d| d.doctor.specialty == "Cardiology" && d.distance <= 10.0));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_coordinates() {
        let response = app()
            .oneshot(search_request(r#"{"latitude": 120.0, "longitude": 78.0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: SearchDoctorsResponse = read_json(response).await;
        assert!(!body.success);
        assert_eq!(body.count, 0);
        assert!(body.error.is_some());
    }

    #[tokio::test]
    async fn test_details_endpoint() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/doctor/nonexistent-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: DoctorDetailsResponse = read_json(response).await;
        assert_eq!(body.error.as_deref(), Some("Doctor not found"));

        let response = app
            .clone()
            .oneshot(search_request(r#"{"max_distance": 20}"#))
            .await
            .unwrap();
        let found: SearchDoctorsResponse = read_json(response).await;
        let id = found.doctors[0].doctor.id.clone();

        let response = app
            .oneshot(
                Request::get(format!("/api/doctor/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: DoctorDetailsResponse = read_json(response).await;
        assert_eq!(body.doctor.map(|d| d.id), Some(id));
    }

    #[tokio::test]
    async fn test_health_and_stats() {
        let app = app();

        let response = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["status"], "ok");

        let response = app
            .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["cache_entries"], 0);
        assert_eq!(body["cache_ttl_seconds"], 3600);
    }

    #[tokio::test]
    async fn test_cors_header() {
        let response = app()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&"*".parse().unwrap())
        );
    }
}
