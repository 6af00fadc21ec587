//! OpenAPI documentation configuration.
//!
//! Success payloads are documented as the `source_output` of the response
//! envelope.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, extraction_handler, return_json_handler, system_handler, user_handler,
    vendor_handler,
};
use crate::api::state::AppInfo;
use crate::domain::{
    CreateExtraction, CreateReturnJson, CreateUser, CreateVendor, ExtractionResponse,
    LoginLogResponse, LoginRequest, LoginResponse, LogoutRequest, PasswordUpdate,
    ReturnJsonResponse, UpdateExtraction, UpdateReturnJson, UpdateUser, UpdateVendor, UserList,
    UserResponse, VendorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "InvoAI User Management",
        version = "1.0.0",
        description = "Users, vendors, extraction definitions and extracted invoice documents"
    ),
    servers((url = "http://localhost:3000", description = "Local development server")),
    paths(
        system_handler::root,
        system_handler::health,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::login_history,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::get_users_by_bio_id,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::update_password,
        user_handler::delete_user,
        vendor_handler::list_vendors,
        vendor_handler::get_vendor,
        vendor_handler::create_vendor,
        vendor_handler::update_vendor,
        vendor_handler::delete_vendor,
        extraction_handler::list_extractions,
        extraction_handler::get_extraction,
        extraction_handler::create_extraction,
        extraction_handler::update_extraction,
        extraction_handler::delete_extraction,
        return_json_handler::list_return_jsons,
        return_json_handler::get_return_json,
        return_json_handler::create_return_json,
        return_json_handler::update_return_json,
        return_json_handler::delete_return_json,
    ),
    components(schemas(
        AppInfo,
        system_handler::HealthStatus,
        LoginRequest,
        LoginResponse,
        LogoutRequest,
        LoginLogResponse,
        CreateUser,
        UpdateUser,
        PasswordUpdate,
        UserResponse,
        UserList,
        CreateVendor,
        UpdateVendor,
        VendorResponse,
        CreateExtraction,
        UpdateExtraction,
        ExtractionResponse,
        CreateReturnJson,
        UpdateReturnJson,
        ReturnJsonResponse,
    )),
    tags(
        (name = "System", description = "Application info and health"),
        (name = "Authentication", description = "Login, logout and login history"),
        (name = "Users", description = "User management"),
        (name = "Vendors", description = "Vendor management"),
        (name = "Extractions", description = "Bounding-box extraction definitions"),
        (name = "Return JSON", description = "Extracted invoice documents")
    )
)]
pub struct ApiDoc;
