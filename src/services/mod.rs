//! Application services layer - Use cases and business logic.
//!
//! Services receive their repositories through the constructor, unwrap
//! repository outcomes with `?` and shape the response DTOs and messages.

mod auth_service;
pub mod container;
mod extraction_service;
mod return_json_service;
mod user_service;
mod vendor_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use extraction_service::{ExtractionManager, ExtractionService};
pub use return_json_service::{ReturnJsonManager, ReturnJsonService};
pub use user_service::{UserManager, UserService};
pub use vendor_service::{VendorManager, VendorService};

#[cfg(test)]
pub use auth_service::MockAuthService;
#[cfg(test)]
pub use container::MockServiceContainer;
#[cfg(test)]
pub use extraction_service::MockExtractionService;
#[cfg(test)]
pub use return_json_service::MockReturnJsonService;
#[cfg(test)]
pub use user_service::MockUserService;
#[cfg(test)]
pub use vendor_service::MockVendorService;
