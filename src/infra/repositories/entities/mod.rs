//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod extraction;
pub mod login_log;
pub mod return_json;
pub mod user;
pub mod vendor;

pub use extraction::Entity as ExtractionEntity;
pub use login_log::Entity as LoginLogEntity;
pub use return_json::Entity as ReturnJsonEntity;
pub use user::Entity as UserEntity;
pub use vendor::Entity as VendorEntity;
