//! Best-effort parsing of model replies
//!
//! The provider is asked for a four-line reply (`Cyberbullying:`,
//! `Confidence:`, `Explanation:`, `Highlights:`), but nothing guarantees it
//! complies. Parsing is total: lines may appear in any order, unrecognized
//! lines are ignored, and missing fields keep their defaults. Downstream
//! aggregation must never depend on the model following the format.

use crate::types::ClassificationRecord;
use tracing::debug;

const LABEL_PREFIX: &str = "cyberbullying:";
const CONFIDENCE_PREFIX: &str = "confidence:";
const EXPLANATION_PREFIX: &str = "explanation:";
const HIGHLIGHTS_PREFIX: &str = "highlights:";

/// Extract structured fields from a raw model reply.
///
/// Keyword prefixes are matched case-insensitively at the start of each
/// line; the value is the trimmed text after the colon. When the same field
/// appears more than once the last occurrence wins.
pub fn parse_reply(raw: &str) -> ClassificationRecord {
    let mut record = ClassificationRecord::default();
    let mut matched = false;

    for line in raw.lines() {
        if let Some(value) = field_value(line, LABEL_PREFIX) {
            record.label = value.to_string();
            matched = true;
        } else if let Some(value) = field_value(line, CONFIDENCE_PREFIX) {
            record.confidence = parse_confidence(value);
            matched = true;
        } else if let Some(value) = field_value(line, EXPLANATION_PREFIX) {
            record.explanation = value.to_string();
            matched = true;
        } else if let Some(value) = field_value(line, HIGHLIGHTS_PREFIX) {
            record.highlights = value.to_string();
            matched = true;
        }
    }

    if !matched && !raw.is_empty() {
        debug!("reply contained no recognized fields");
    }

    record
}

/// Case-insensitive prefix match returning the trimmed value after the colon
fn field_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    match line.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(line[prefix.len()..].trim()),
        _ => None,
    }
}

/// Parse a percentage-like confidence token, defaulting to 0.0
fn parse_confidence(value: &str) -> f64 {
    value.trim_end_matches('%').trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_reply() {
        let reply = "Cyberbullying: Yes\nConfidence: 87%\nExplanation: Insulting language\nHighlights: idiot, loser";
        let record = parse_reply(reply);

        assert_eq!(record.label, "Yes");
        assert_eq!(record.confidence, 87.0);
        assert_eq!(record.explanation, "Insulting language");
        assert_eq!(record.highlights, "idiot, loser");
        assert!(record.is_bullying());
        assert_eq!(record.verdict().as_str(), "cyberbullying");
    }

    #[test]
    fn test_parse_unparseable_confidence_defaults_to_zero() {
        let record = parse_reply("Confidence: not-a-number%\nCyberbullying: No");

        assert_eq!(record.label, "No");
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.explanation, "");
        assert_eq!(record.highlights, "");
        assert_eq!(record.verdict().as_str(), "not_cyberbullying");
    }

    #[test]
    fn test_parse_empty_reply() {
        let record = parse_reply("");

        assert_eq!(record, ClassificationRecord::default());
        assert!(!record.is_bullying());
        assert_eq!(record.verdict().as_str(), "not_cyberbullying");
    }

    #[test]
    fn test_parse_is_order_independent() {
        let reply = "Highlights: jerk\nExplanation: Name calling\nConfidence: 55%\nCyberbullying: Yes";
        let record = parse_reply(reply);

        assert_eq!(record.label, "Yes");
        assert_eq!(record.confidence, 55.0);
        assert_eq!(record.explanation, "Name calling");
        assert_eq!(record.highlights, "jerk");
    }

    #[test]
    fn test_parse_keyword_case_is_ignored() {
        let record = parse_reply("CYBERBULLYING: No\nconfidence: 12\neXpLaNaTiOn: Neutral tone");

        assert_eq!(record.label, "No");
        assert_eq!(record.confidence, 12.0);
        assert_eq!(record.explanation, "Neutral tone");
    }

    #[test]
    fn test_parse_value_case_is_preserved() {
        let record = parse_reply("Cyberbullying: YES");
        assert_eq!(record.label, "YES");
        assert!(record.is_bullying());
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let reply = "Cyberbullying: No\nConfidence: 10%\nCyberbullying: Yes\nConfidence: 90%";
        let record = parse_reply(reply);

        assert_eq!(record.label, "Yes");
        assert_eq!(record.confidence, 90.0);
    }

    #[test]
    fn test_parse_ignores_unrecognized_lines() {
        let reply = "Here is my assessment:\nCyberbullying: No\nThanks for asking!";
        let record = parse_reply(reply);

        assert_eq!(record.label, "No");
        assert_eq!(record.explanation, "");
    }

    #[test]
    fn test_parse_confidence_without_percent_sign() {
        let record = parse_reply("Confidence: 42.5");
        assert_eq!(record.confidence, 42.5);
    }

    #[test]
    fn test_parse_confidence_with_space_before_percent() {
        let record = parse_reply("Confidence: 73 %");
        assert_eq!(record.confidence, 73.0);
    }

    #[test]
    fn test_parse_does_not_clamp_confidence() {
        // Range validation is deliberately absent; values pass through as
        // the model wrote them.
        let record = parse_reply("Confidence: 250%");
        assert_eq!(record.confidence, 250.0);
    }

    #[test]
    fn test_parse_total_over_arbitrary_input() {
        for raw in [
            "::::",
            "Cyberbullying",
            "cyberbullying:",
            "\n\n\n",
            "Confidence: %",
            "日本語のテキスト\nCyberbullying: Yes",
            "\u{1F600} emoji line\nConfidence: 7%",
        ] {
            // Must not panic, whatever the input
            let _ = parse_reply(raw);
        }

        let record = parse_reply("cyberbullying:");
        assert_eq!(record.label, "");
    }

    #[test]
    fn test_parse_indented_keyword_is_not_matched() {
        // Prefix match anchors at the start of the line
        let record = parse_reply("  Cyberbullying: Yes");
        assert_eq!(record.label, "");
    }
}
