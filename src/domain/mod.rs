//! Domain layer - Core business entities and logic
//!
//! Records, insert drafts, request/response DTOs and the password value
//! object. Nothing here touches the database.

pub mod auth;
pub mod extraction;
pub mod login_log;
pub mod password;
pub mod patch;
pub mod return_json;
pub mod user;
pub mod vendor;

pub use auth::{LoginRequest, LoginResponse, LogoutRequest};
pub use extraction::{
    CreateExtraction, Extraction, ExtractionResponse, NewExtraction, UpdateExtraction,
};
pub use login_log::{LoginLog, LoginLogResponse, NewLoginLog};
pub use password::Password;
pub use return_json::{
    CreateReturnJson, NewReturnJson, ReturnJson, ReturnJsonResponse, UpdateReturnJson,
};
pub use user::{CreateUser, NewUser, PasswordUpdate, UpdateUser, User, UserList, UserResponse};
pub use vendor::{CreateVendor, NewVendor, UpdateVendor, Vendor, VendorResponse};
