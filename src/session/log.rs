use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A transcribed fragment submitted by the capture layer
    User,
    /// A generated summary or answer
    Assistant,
}

/// A single entry of the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub role: Role,

    pub content: String,

    /// ISO-8601 UTC with second precision, e.g. `2025-10-27T14:30:05Z`
    #[serde(rename = "t")]
    pub timestamp: String,
}

impl LogEntry {
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: utc_timestamp(),
        }
    }
}

/// Current UTC time formatted as `YYYY-MM-DDTHH:MM:SSZ`
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_has_second_precision_and_zulu_suffix() {
        let t = utc_timestamp();
        assert_eq!(t.len(), "2025-10-27T14:30:05Z".len());
        assert!(t.ends_with('Z'));
        assert!(!t.contains('.'));
        assert!(DateTime::parse_from_rfc3339(&t).is_ok());
    }

    #[test]
    fn entry_serializes_lowercase_role() {
        let entry = LogEntry {
            role: Role::Assistant,
            content: "done".to_string(),
            timestamp: "2025-10-27T14:30:05Z".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        assert!(json.contains("\"t\":\"2025-10-27T14:30:05Z\""));
    }
}
