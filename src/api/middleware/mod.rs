//! API middleware.

mod panic;
mod request_context;

pub use panic::handle_panic;
pub use request_context::make_request_span;
