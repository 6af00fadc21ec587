//! Timestamp helpers.

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time truncated to microseconds.
///
/// Postgres and SQLite both keep microsecond precision, so a value stamped
/// here compares equal after a database round-trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_now_has_microsecond_precision() {
        let stamp = now();
        assert_eq!(stamp.nanosecond() % 1_000, 0);
    }
}
