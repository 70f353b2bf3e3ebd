use serde::{Deserialize, Serialize};

/// Usage summary of a directory tree
///
/// Quotas are `-1` when none is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub directory_count: u64,
    pub file_count: u64,
    pub length: u64,
    #[serde(default = "no_quota")]
    pub quota: i64,
    pub space_consumed: u64,
    #[serde(default = "no_quota")]
    pub space_quota: i64,
}

fn no_quota() -> i64 {
    -1
}

impl ContentSummary {
    #[must_use]
    pub fn has_quota(&self) -> bool {
        self.quota >= 0
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentSummaryEnvelope {
    #[serde(rename = "ContentSummary", default)]
    pub summary: Option<ContentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_json() {
        let json = r#"{"ContentSummary":{"directoryCount":2,"fileCount":1,"length":24930,"quota":-1,"spaceConsumed":24930,"spaceQuota":-1}}"#;
        let envelope: ContentSummaryEnvelope = serde_json::from_str(json).unwrap();
        let summary = envelope.summary.unwrap();

        assert_eq!(summary.directory_count, 2);
        assert_eq!(summary.space_consumed, 24930);
        assert!(!summary.has_quota());
    }

    #[test]
    fn test_missing_envelope() {
        let envelope: ContentSummaryEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.summary.is_none());
    }
}
