use domain::alert::entity::RawAlert;

/// Parse line-oriented CSV content into raw alerts: one message per line,
/// blank lines skipped, an optional leading `alert` header row ignored.
///
/// The upload format is a single unquoted column, so no quoting or escaping
/// is interpreted. `source` labels where the batch came from (for example
/// `"imported"` for file uploads).
pub fn parse_csv_batch(content: &str, source: &str) -> Vec<RawAlert> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let start = usize::from(
        lines
            .first()
            .is_some_and(|line| line.eq_ignore_ascii_case("alert")),
    );

    lines[start..]
        .iter()
        .map(|line| RawAlert {
            message: (*line).to_string(),
            timestamp: None,
            source: Some(source.to_string()),
            severity: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_alert_per_line() {
        let alerts = parse_csv_batch(
            "Failed SSH login from 10.0.0.1\nMalware detected on host-7\n",
            "imported",
        );

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "Failed SSH login from 10.0.0.1");
        assert_eq!(alerts[0].source.as_deref(), Some("imported"));
        assert!(alerts[0].timestamp.is_none());
    }

    #[test]
    fn skips_header_row_and_blank_lines() {
        let alerts = parse_csv_batch("Alert\n\n  \nsome message\n\n", "imported");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "some message");
    }

    #[test]
    fn header_only_or_empty_content_yields_no_alerts() {
        assert!(parse_csv_batch("alert\n", "imported").is_empty());
        assert!(parse_csv_batch("", "imported").is_empty());
    }

    #[test]
    fn trims_surrounding_whitespace_per_line() {
        let alerts = parse_csv_batch("  padded message  \n", "api");
        assert_eq!(alerts[0].message, "padded message");
    }
}
