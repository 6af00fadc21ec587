//! Utility functions and helpers.

pub mod clock;
