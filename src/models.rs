use std::sync::Arc;

use crate::config::Config;
use crate::llm::provider::LLMAdapter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<dyn LLMAdapter>,
}

/// One uploaded multipart file part. Lives only for the duration of the
/// request that carried it.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub data: bytes::Bytes,
}

/// Caller-supplied analysis toggles, sent as a JSON string in the
/// `settings` form field. The toggles only influence prompt content.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisSettings {
    pub future_scenarios: bool,
    pub suggest_changes: bool,
    pub highlight_dates: bool,
}

impl AnalysisSettings {
    /// Parses the raw form value. An unparseable string downgrades to the
    /// defaults rather than failing the request (matching the frontend's
    /// expectations).
    pub fn from_form(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// The response shape the prompt instructs the model to produce. The
/// handler relays the model's JSON uninspected, so this type documents the
/// contract rather than gating it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub justification: String,
    /// 0 to 100, where 100 is perfect compliance/quality
    pub score: i64,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_empty_object_defaults_false() {
        let settings = AnalysisSettings::from_form("{}");
        assert_eq!(settings, AnalysisSettings::default());
        assert!(!settings.future_scenarios);
        assert!(!settings.suggest_changes);
        assert!(!settings.highlight_dates);
    }

    #[test]
    fn test_settings_invalid_json_defaults_false() {
        let settings = AnalysisSettings::from_form("not json at all");
        assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    fn test_settings_partial_object() {
        let settings = AnalysisSettings::from_form(r#"{"highlightDates": true}"#);
        assert!(settings.highlight_dates);
        assert!(!settings.future_scenarios);
        assert!(!settings.suggest_changes);
    }

    #[test]
    fn test_settings_camel_case_field_names() {
        let settings = AnalysisSettings::from_form(
            r#"{"futureScenarios": true, "suggestChanges": true, "highlightDates": false}"#,
        );
        assert!(settings.future_scenarios);
        assert!(settings.suggest_changes);
        assert!(!settings.highlight_dates);
    }
}
