//! API layer - HTTP handlers and middleware
//!
//! Handlers return `Outcome<T>` directly; both arms render as the response
//! envelope with the HTTP status taken from the outcome's code.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::{AppInfo, AppState};
