// Prompt construction for document analysis
//
// Fixed template: the only variation is the interpolated settings flags and
// the (truncated) document text. The required JSON shape matches the
// frontend's AnalysisResult interface.

use crate::models::AnalysisSettings;

/// Document text beyond this many characters is dropped to bound model
/// input size.
pub const MAX_DOCUMENT_CHARS: usize = 30_000;

pub fn build_prompt(combined_text: &str, settings: &AnalysisSettings) -> String {
    let excerpt = truncate_chars(combined_text, MAX_DOCUMENT_CHARS);

    format!(
        "Act as a senior legal AI assistant. Analyze the following document text.\n\
         \n\
         User Settings:\n\
         - Include Future Scenarios: {future_scenarios}\n\
         - Suggest Changes: {suggest_changes}\n\
         - Highlight Dates: {highlight_dates}\n\
         \n\
         Return a valid JSON object (NO markdown formatting, just raw JSON) with the following structure:\n\
         {{\n\
           \"summary\": \"A concise summary of the document (string).\",\n\
           \"justification\": \"Why this document is low/high risk or relevant (string).\",\n\
           \"score\": 0 to 100 (integer, where 100 is perfect compliance/quality),\n\
           \"risks\": [\"Risk 1\", \"Risk 2\", \"Risk 3\"] (array of strings),\n\
           \"recommendations\": [\"Rec 1\", \"Rec 2\"] (array of strings)\n\
         }}\n\
         \n\
         Document Content:\n\
         {excerpt}",
        future_scenarios = settings.future_scenarios,
        suggest_changes = settings.suggest_changes,
        highlight_dates = settings.highlight_dates,
        excerpt = excerpt,
    )
}

/// Truncation counts chars, not bytes, so it never splits a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document_text() {
        let prompt = build_prompt("Lease runs through June.", &AnalysisSettings::default());
        assert!(prompt.contains("Document Content:\nLease runs through June."));
    }

    #[test]
    fn test_prompt_labels_settings() {
        let settings = AnalysisSettings {
            future_scenarios: false,
            suggest_changes: true,
            highlight_dates: true,
        };
        let prompt = build_prompt("text", &settings);
        assert!(prompt.contains("- Include Future Scenarios: false"));
        assert!(prompt.contains("- Suggest Changes: true"));
        assert!(prompt.contains("- Highlight Dates: true"));
    }

    #[test]
    fn test_prompt_requires_raw_json() {
        let prompt = build_prompt("text", &AnalysisSettings::default());
        assert!(prompt.contains("NO markdown formatting, just raw JSON"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"justification\""));
        assert!(prompt.contains("\"score\""));
        assert!(prompt.contains("\"risks\""));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_document_text_truncated_at_budget() {
        let text = "a".repeat(MAX_DOCUMENT_CHARS) + "OVERFLOW";
        let prompt = build_prompt(&text, &AnalysisSettings::default());
        assert!(!prompt.contains("OVERFLOW"));
        assert!(prompt.contains(&"a".repeat(MAX_DOCUMENT_CHARS)));
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        // Multi-byte chars right at the boundary must not panic
        let text = "é".repeat(MAX_DOCUMENT_CHARS + 10);
        let prompt = build_prompt(&text, &AnalysisSettings::default());
        assert!(prompt.contains(&"é".repeat(100)));
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("short", 30), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }
}
