// Model output normalization
//
// Models occasionally wrap their JSON in markdown code fences despite the
// prompt saying not to. The fences are stripped as literal substrings and
// the remainder is parsed. No schema validation happens here; whatever
// parses as JSON is relayed to the caller as-is.

use serde_json::Value;

use crate::types::{AppError, AppResult};

/// Removes the ```json / ``` fence markers and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Cleans and parses raw model output. Parse failures surface the serde
/// error message so the caller sees what was wrong with the output.
pub fn parse_analysis(raw: &str) -> AppResult<Value> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| AppError::Normalization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json_parses() {
        let value = parse_analysis(r#"{"summary": "ok", "score": 72}"#).unwrap();
        assert_eq!(value["summary"], "ok");
        assert_eq!(value["score"], 72);
    }

    #[test]
    fn test_fenced_json_matches_bare_json() {
        let bare = parse_analysis(r#"{"score": 80, "risks": []}"#).unwrap();
        let fenced = parse_analysis("```json\n{\"score\": 80, \"risks\": []}\n```").unwrap();
        assert_eq!(bare, fenced);
    }

    #[test]
    fn test_plain_fence_without_language_tag() {
        let value = parse_analysis("```\n{\"summary\": \"s\"}\n```").unwrap();
        assert_eq!(value["summary"], "s");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let value = parse_analysis("  \n {\"a\": 1} \n ").unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_non_json_output_is_normalization_error() {
        let err = parse_analysis("I'm sorry, I can't analyze that.").unwrap_err();
        match err {
            AppError::Normalization(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Normalization error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_json_passes_through() {
        // Schema validation is the frontend's problem; any valid JSON is
        // relayed untouched
        let value = parse_analysis(r#"{"unexpected": true}"#).unwrap();
        assert_eq!(value["unexpected"], true);
    }
}
