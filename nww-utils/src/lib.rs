//! Shared utility functions for NYC wastewater crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Format a NaiveDate the way the dashboard footer shows it, e.g. "Sun Jan 15 2023".
    pub fn format_day_string(date: &NaiveDate) -> String {
        date.format("%a %b %d %Y").to_string()
    }

    /// Parse an ISO-8601 date or date-time string into its calendar date.
    ///
    /// Accepts "2023-01-15", "2023-01-15T00:00:00", "2023-01-15T00:00:00.000"
    /// and offset forms like "2023-01-15T00:00:00.000Z". Offset forms keep the
    /// date as written in the string's own offset.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt.date());
            }
        }
        anyhow::bail!("unrecognized ISO date: {:?}", s)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_plain_date() {
            let parsed = parse_date("2023-01-15").unwrap();
            assert_eq!(parsed, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        }

        #[test]
        fn test_parse_date_time_forms() {
            let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
            assert_eq!(parse_date("2023-01-15T00:00:00").unwrap(), expected);
            assert_eq!(parse_date("2023-01-15T00:00:00.000").unwrap(), expected);
            assert_eq!(parse_date("2023-01-15T00:00:00.000Z").unwrap(), expected);
            assert_eq!(parse_date(" 2023-01-15 12:30:00 ").unwrap(), expected);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_date("01/15/2023").is_err());
            assert!(parse_date("").is_err());
            assert!(parse_date("2023-02-30").is_err());
        }

        #[test]
        fn test_format_day_string() {
            let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            assert_eq!(format_day_string(&date), "Sun Jan 01 2023");
        }
    }
}
