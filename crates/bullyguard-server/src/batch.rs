//! CSV batch ingestion and HTML result rendering

use crate::store::RESULT_COLUMNS;
use bullyguard_core::{BatchEntry, Error, Result};

/// Extract the message column from an uploaded CSV.
///
/// Row 0 is discarded as a header; column 0 of every remaining row is the
/// message text. Rows are allowed to have uneven field counts; a row with
/// no first column reads as an empty message.
pub fn read_batch_texts(data: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut texts = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| Error::invalid_input(format!("unreadable CSV row: {e}")))?;
        texts.push(row.get(0).unwrap_or_default().to_string());
    }
    Ok(texts)
}

/// Render processed batch rows as the HTML fragment returned to the dashboard
pub fn render_html_table(entries: &[BatchEntry]) -> String {
    let mut html = String::from("<table class=\"table table-striped table-dark\"><thead><tr>");
    for column in RESULT_COLUMNS {
        html.push_str("<th>");
        html.push_str(column);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for entry in entries {
        let record = &entry.record;
        let confidence = record.confidence.to_string();
        html.push_str("<tr>");
        for cell in [
            entry.text.as_str(),
            record.verdict().as_str(),
            confidence.as_str(),
            record.explanation.as_str(),
            record.highlights.as_str(),
        ] {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

/// Minimal HTML escaping for table cells
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bullyguard_core::parse_reply;

    #[test]
    fn test_read_batch_discards_header_and_takes_column_zero() {
        let data = b"text,source\nyou stink,twitter\nhello there,forum\n";
        let texts = read_batch_texts(data).unwrap();
        assert_eq!(texts, vec!["you stink", "hello there"]);
    }

    #[test]
    fn test_read_batch_empty_file_yields_no_rows() {
        assert!(read_batch_texts(b"").unwrap().is_empty());
    }

    #[test]
    fn test_read_batch_header_only_yields_no_rows() {
        assert!(read_batch_texts(b"text\n").unwrap().is_empty());
    }

    #[test]
    fn test_read_batch_tolerates_uneven_rows() {
        let data = b"text,source,notes\nonly text\nfull,row,here\n";
        let texts = read_batch_texts(data).unwrap();
        assert_eq!(texts, vec!["only text", "full"]);
    }

    #[test]
    fn test_read_batch_handles_quoted_fields() {
        let data = b"text\n\"hey, you\"\nplain\n";
        let texts = read_batch_texts(data).unwrap();
        assert_eq!(texts, vec!["hey, you", "plain"]);
    }

    #[test]
    fn test_render_table_shape() {
        let entries = vec![
            BatchEntry::new("you stink", parse_reply("Cyberbullying: Yes\nConfidence: 80%")),
            BatchEntry::new("hi", parse_reply("Cyberbullying: No\nConfidence: 99%")),
        ];
        let html = render_html_table(&entries);

        assert!(html.starts_with("<table class=\"table table-striped table-dark\">"));
        assert!(html.contains("<th>Text</th>"));
        assert!(html.contains("<th>Highlights</th>"));
        assert!(html.contains("<td>you stink</td>"));
        assert!(html.contains("<td>cyberbullying</td>"));
        assert!(html.contains("<td>80</td>"));
        assert!(html.contains("<td>not_cyberbullying</td>"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.ends_with("</tbody></table>"));
    }

    #[test]
    fn test_render_table_escapes_cells() {
        let entries = vec![BatchEntry::new(
            "<script>alert('x')</script>",
            parse_reply("Cyberbullying: Yes\nExplanation: contains \"markup\" & tags"),
        )];
        let html = render_html_table(&entries);

        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("contains &quot;markup&quot; &amp; tags"));
        assert!(!html.contains("<script>"));
    }
}
