//! Data Processor Module
//! Cell-level parsing: multi-valued splitting, trust ratings and submission times.

use serde::Serialize;

/// Outcome of parsing a trust rating cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TrustRating {
    Rating(i64),
    Missing,
    Unparseable(String),
}

/// Outcome of parsing a contest submission cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TimeSample {
    Seconds(f64),
    Rejected,
    Missing,
    Unparseable(String),
}

impl TimeSample {
    pub fn seconds(&self) -> Option<f64> {
        match self {
            TimeSample::Seconds(s) => Some(*s),
            _ => None,
        }
    }
}

/// Handles parsing of raw cell text.
pub struct DataProcessor;

impl DataProcessor {
    /// Split a multi-valued field, trimming tokens and dropping empty ones.
    pub fn split_multi_valued(field: &str, delimiter: char) -> impl Iterator<Item = &str> {
        field
            .split(delimiter)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Parse an integer trust rating.
    pub fn parse_trust_rating(field: &str) -> TrustRating {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return TrustRating::Missing;
        }
        match trimmed.parse::<i64>() {
            Ok(level) => TrustRating::Rating(level),
            Err(_) => TrustRating::Unparseable(field.to_string()),
        }
    }

    /// Parse a "MM:SS.s" submission time into seconds.
    ///
    /// Parts after the second `:` are ignored.
    pub fn parse_submission_time(cell: &str, rejected_marker: &str) -> TimeSample {
        if cell.is_empty() {
            return TimeSample::Missing;
        }
        if cell == rejected_marker {
            return TimeSample::Rejected;
        }

        let mut parts = cell.split(':');
        let minutes = parts.next().and_then(|m| m.trim().parse::<i64>().ok());
        let seconds = parts.next().and_then(|s| s.trim().parse::<f64>().ok());

        match (minutes, seconds) {
            (Some(m), Some(s)) => TimeSample::Seconds(m as f64 * 60.0 + s),
            _ => TimeSample::Unparseable(cell.to_string()),
        }
    }

    /// A submission succeeded if the cell is present and not rejected.
    pub fn is_successful(cell: &str, rejected_marker: &str) -> bool {
        !cell.is_empty() && cell != rejected_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REJECTED: &str = "rejected";

    #[test]
    fn splits_and_trims_tool_lists() {
        let tools: Vec<&str> =
            DataProcessor::split_multi_valued(" ChatGPT ; Claude;;  ;Copilot;", ';').collect();
        assert_eq!(tools, vec!["ChatGPT", "Claude", "Copilot"]);
        assert_eq!(DataProcessor::split_multi_valued("", ';').count(), 0);
    }

    #[test]
    fn trust_ratings() {
        assert_eq!(DataProcessor::parse_trust_rating("4"), TrustRating::Rating(4));
        assert_eq!(DataProcessor::parse_trust_rating(" 2 "), TrustRating::Rating(2));
        assert_eq!(DataProcessor::parse_trust_rating("   "), TrustRating::Missing);
        assert_eq!(
            DataProcessor::parse_trust_rating("3.5"),
            TrustRating::Unparseable("3.5".into())
        );
        assert_eq!(
            DataProcessor::parse_trust_rating("high"),
            TrustRating::Unparseable("high".into())
        );
    }

    #[test]
    fn submission_times() {
        let parsed = DataProcessor::parse_submission_time("01:23.4", REJECTED)
            .seconds()
            .unwrap();
        assert!((parsed - 83.4).abs() < 1e-9);

        assert_eq!(
            DataProcessor::parse_submission_time("rejected", REJECTED),
            TimeSample::Rejected
        );
        assert_eq!(
            DataProcessor::parse_submission_time("", REJECTED),
            TimeSample::Missing
        );
        assert_eq!(
            DataProcessor::parse_submission_time("abc", REJECTED),
            TimeSample::Unparseable("abc".into())
        );
        assert_eq!(
            DataProcessor::parse_submission_time("1.5:00", REJECTED),
            TimeSample::Unparseable("1.5:00".into())
        );
        assert_eq!(
            DataProcessor::parse_submission_time("10:05.0:99", REJECTED).seconds(),
            Some(605.0)
        );
    }

    #[test]
    fn malformed_time_still_counts_as_success() {
        assert!(DataProcessor::is_successful("abc", REJECTED));
        assert!(DataProcessor::is_successful("00:42.0", REJECTED));
        assert!(!DataProcessor::is_successful("rejected", REJECTED));
        assert!(!DataProcessor::is_successful("", REJECTED));
    }
}
