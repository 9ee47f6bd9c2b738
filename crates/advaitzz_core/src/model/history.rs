//! Run history entry model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Durable record of one expansion run.
///
/// `timestamp` is Unix epoch milliseconds (UTC). Logs written before
/// timestamps existed deserialize with `timestamp = 0`, and the older
/// `extra` key is accepted for `note`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: i64,
    pub domains: Vec<String>,
    pub categories: Vec<String>,
    #[serde(default, alias = "extra")]
    pub note: String,
    pub count: usize,
}

impl HistoryEntry {
    /// Builds an entry stamped with the current wall-clock time.
    pub fn now(domains: Vec<String>, categories: Vec<String>, note: String, count: usize) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            domains,
            categories,
            note,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryEntry;

    #[test]
    fn accepts_legacy_entries_without_timestamp() {
        let raw = r#"{"domains":["a.io"],"categories":["Index Of"],"extra":"","count":1}"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.timestamp, 0);
        assert_eq!(entry.domains, vec!["a.io".to_string()]);
        assert_eq!(entry.count, 1);
    }

    #[test]
    fn now_stamps_a_positive_timestamp() {
        let entry = HistoryEntry::now(vec![], vec![], String::new(), 0);
        assert!(entry.timestamp > 0);
    }
}
