//! Web server module
//!
//! Provides the JSON API and static file serving for MedFinder.

mod handlers;
mod routes;
mod state;

pub use handlers::SearchParams;
pub use routes::create_router;
pub use state::AppState;
