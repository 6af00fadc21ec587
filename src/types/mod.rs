//! Shared types for the uniform success/failure convention.

pub mod outcome;
mod response;

pub use outcome::{Done, Outcome, OutcomeExt};
pub use response::Envelope;
