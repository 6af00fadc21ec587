//! HTTP request handlers.

pub mod auth_handler;
pub mod extraction_handler;
pub mod return_json_handler;
pub mod system_handler;
pub mod user_handler;
pub mod vendor_handler;

pub use auth_handler::auth_routes;
pub use extraction_handler::extraction_routes;
pub use return_json_handler::return_json_routes;
pub use system_handler::system_routes;
pub use user_handler::user_routes;
pub use vendor_handler::vendor_routes;
