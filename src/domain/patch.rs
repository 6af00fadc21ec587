//! Serde support for partial-update payloads.
//!
//! A nullable column in an update DTO is `Option<Option<T>>`:
//! absent key → `None` (keep), `null` → `Some(None)` (clear),
//! value → `Some(Some(v))` (set).

use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default, deserialize_with = "nullable")]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
