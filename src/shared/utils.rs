//! Utility functions and helpers

use chrono::{DateTime, Utc};

/// Calculate `part` as a percentage of `total`, 0 when `total` is 0
pub fn calculate_percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Timestamp suitable for file names, e.g. `20261017_093000`
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Generate unique ID
pub fn generate_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_percentage() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
        assert_eq!(calculate_percentage(1, 4), 25.0);
        assert_eq!(calculate_percentage(3, 3), 100.0);
    }

    #[test]
    fn test_file_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 5).unwrap();
        assert_eq!(file_timestamp(at), "20261017_093005");
    }
}
