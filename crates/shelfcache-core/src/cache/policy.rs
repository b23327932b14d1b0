use chrono::{DateTime, Duration, Utc};

/// A dataset is refetched once its snapshot is this old.
pub const REFRESH_INTERVAL_HOURS: i64 = 24;

/// Whether a dataset last refreshed at `last_refresh` is due at `now`.
///
/// Never refreshed means due. A timestamp in the future (clock skew) is
/// treated as fresh.
pub fn is_due(last_refresh: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_refresh {
        None => true,
        Some(at) => now - at >= Duration::hours(REFRESH_INTERVAL_HOURS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_refreshed_is_due() {
        assert!(is_due(None, Utc::now()));
    }

    #[test]
    fn test_due_at_exactly_24_hours() {
        let now = Utc::now();
        assert!(!is_due(Some(now - Duration::hours(23)), now));
        assert!(!is_due(Some(now - Duration::hours(24) + Duration::milliseconds(1)), now));
        assert!(is_due(Some(now - Duration::hours(24)), now));
        assert!(is_due(Some(now - Duration::days(3)), now));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let now = Utc::now();
        assert!(!is_due(Some(now + Duration::hours(2)), now));
    }
}
