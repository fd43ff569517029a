// utils/reference.rs
use chrono::{DateTime, Utc};

/// Application reference synthesized from the submission timestamp,
/// e.g. `APP-17230042`.
pub fn generate_reference(submitted_at: DateTime<Utc>) -> String {
    format!("APP-{:08}", submitted_at.timestamp() % 100_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn reference_matches_expected_pattern() {
        let pattern = Regex::new(r"^APP-\d{8}$").unwrap();
        assert!(pattern.is_match(&generate_reference(Utc::now())));

        // Small timestamps still pad to eight digits
        let epoch = DateTime::from_timestamp(42, 0).unwrap();
        assert_eq!(generate_reference(epoch), "APP-00000042");
    }
}
