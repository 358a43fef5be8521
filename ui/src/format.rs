//! Shared pt-BR formatting helpers for the financeiro tables.

use chrono::NaiveDateTime;

/// Formats a timestamp the way the tables show it (e.g., "09/12/2025, 00:25").
pub fn format_data_hora(data: &NaiveDateTime) -> String {
    data.format("%d/%m/%Y, %H:%M").to_string()
}

/// Date-only form (e.g., "09/12/2025").
pub fn format_data(data: &NaiveDateTime) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Truncates free text to `max_chars` characters, appending "..." when the
/// text was cut. Absent or empty text renders as a dash.
///
/// Counts characters rather than bytes so accented text never splits a
/// UTF-8 sequence.
pub fn truncate_with_ellipsis(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return "-".to_string();
    };

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 9)
            .unwrap()
            .and_hms_opt(0, 25, 27)
            .unwrap()
    }

    #[test]
    fn test_format_data_hora() {
        assert_eq!(format_data_hora(&timestamp()), "09/12/2025, 00:25");
    }

    #[test]
    fn test_format_data() {
        assert_eq!(format_data(&timestamp()), "09/12/2025");
    }

    #[test]
    fn test_short_text_is_verbatim() {
        assert_eq!(truncate_with_ellipsis(Some("Baixa parcial"), 50), "Baixa parcial");
    }

    #[test]
    fn test_text_at_limit_is_verbatim() {
        let exact: String = "x".repeat(50);
        assert_eq!(truncate_with_ellipsis(Some(&exact), 50), exact);
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        let long: String = "x".repeat(51);
        let expected = format!("{}...", "x".repeat(50));
        assert_eq!(truncate_with_ellipsis(Some(&long), 50), expected);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let acentuado: String = "ã".repeat(60);
        let resultado = truncate_with_ellipsis(Some(&acentuado), 50);
        assert_eq!(resultado, format!("{}...", "ã".repeat(50)));
    }

    #[test]
    fn test_absent_text_renders_dash() {
        assert_eq!(truncate_with_ellipsis(None, 50), "-");
        assert_eq!(truncate_with_ellipsis(Some(""), 50), "-");
    }
}
