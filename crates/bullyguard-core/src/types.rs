//! Core types for BullyGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured fields extracted from a model reply
///
/// Fields default to empty/zero when the reply omits them; `label` keeps
/// whatever the model wrote, the normalized category comes from [`verdict`].
///
/// [`verdict`]: ClassificationRecord::verdict
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Raw label as written by the model, semantically "Yes"/"No"
    pub label: String,

    /// Confidence percentage, 0.0 when absent or unparseable
    pub confidence: f64,

    /// Short free-form explanation, empty when absent
    pub explanation: String,

    /// Comma-separated offending phrases, empty when absent
    pub highlights: String,
}

impl ClassificationRecord {
    /// Whether the model flagged the message. Derived from `label`, never
    /// stored separately.
    pub fn is_bullying(&self) -> bool {
        self.label.eq_ignore_ascii_case("yes")
    }

    /// Normalized two-valued category for this record
    pub fn verdict(&self) -> Verdict {
        if self.is_bullying() {
            Verdict::Cyberbullying
        } else {
            Verdict::NotCyberbullying
        }
    }
}

/// Normalized output category derived from a record's raw label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Cyberbullying,
    NotCyberbullying,
}

impl Verdict {
    /// Wire representation used in JSON responses and CSV rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cyberbullying => "cyberbullying",
            Self::NotCyberbullying => "not_cyberbullying",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One processed row of an uploaded batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Original message text from column 0 of the upload
    pub text: String,

    /// Parsed classification for the message
    pub record: ClassificationRecord,
}

impl BatchEntry {
    /// Create a new batch entry
    pub fn new(text: impl Into<String>, record: ClassificationRecord) -> Self {
        Self {
            text: text.into(),
            record,
        }
    }
}

/// Snapshot of the process-wide dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Messages classified since startup
    pub total_entries: u64,

    /// Messages flagged as cyberbullying since startup
    pub bullying_cases: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bullying_case_insensitive() {
        for label in ["yes", "Yes", "YES", "yEs"] {
            let record = ClassificationRecord {
                label: label.to_string(),
                ..Default::default()
            };
            assert!(record.is_bullying(), "label {label:?} should flag");
        }
    }

    #[test]
    fn test_is_bullying_rejects_everything_else() {
        for label in ["no", "No", "", "yes please", " yes", "maybe"] {
            let record = ClassificationRecord {
                label: label.to_string(),
                ..Default::default()
            };
            assert!(!record.is_bullying(), "label {label:?} should not flag");
        }
    }

    #[test]
    fn test_verdict_follows_label() {
        let flagged = ClassificationRecord {
            label: "Yes".to_string(),
            ..Default::default()
        };
        assert_eq!(flagged.verdict(), Verdict::Cyberbullying);

        let clean = ClassificationRecord {
            label: "No".to_string(),
            ..Default::default()
        };
        assert_eq!(clean.verdict(), Verdict::NotCyberbullying);
    }

    #[test]
    fn test_verdict_wire_format() {
        assert_eq!(Verdict::Cyberbullying.as_str(), "cyberbullying");
        assert_eq!(Verdict::NotCyberbullying.as_str(), "not_cyberbullying");

        let json = serde_json::to_string(&Verdict::NotCyberbullying).unwrap();
        assert_eq!(json, "\"not_cyberbullying\"");
    }
}
