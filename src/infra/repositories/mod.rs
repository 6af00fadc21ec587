//! Repository layer - Data access abstraction
//!
//! One repository per table. Every operation returns an
//! [`Outcome`](crate::types::Outcome); database errors never escape.

mod base;
pub mod entities;
mod extraction_repository;
mod login_log_repository;
mod return_json_repository;
mod user_repository;
mod vendor_repository;

pub use extraction_repository::{ExtractionRepository, ExtractionStore};
pub use login_log_repository::{LoginLogRepository, LoginLogStore};
pub use return_json_repository::{ReturnJsonRepository, ReturnJsonStore};
pub use user_repository::{UserRepository, UserStore};
pub use vendor_repository::{VendorRepository, VendorStore};

#[cfg(test)]
pub use extraction_repository::MockExtractionRepository;
#[cfg(test)]
pub use login_log_repository::MockLoginLogRepository;
#[cfg(test)]
pub use return_json_repository::MockReturnJsonRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use vendor_repository::MockVendorRepository;
