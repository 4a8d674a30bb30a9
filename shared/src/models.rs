//! Request and response payloads for the quiz API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tone the model should take when analyzing the user's choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityMode {
    Nice,
    #[default]
    Savage,
}

/// Body of `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub themes: String,
}

/// Body of `POST /analyze`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub themes: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub avoided: Vec<String>,
    #[serde(default)]
    pub personality_mode: PersonalityMode,
}

/// Body of `POST /save_response`.
#[derive(Debug, Deserialize)]
pub struct SaveResponseRequest {
    pub theme: String,
    pub analysis: String,
    pub personality_mode: String,
}

/// One persisted quiz result.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SavedResponse {
    pub id: i32,
    pub theme: String,
    pub analysis: String,
    pub personality_mode: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_camel_case_mode() {
        let json = r#"{"themes":"space","choices":["Keep it"],"avoided":["Return it"],"personalityMode":"nice"}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.personality_mode, PersonalityMode::Nice);
        assert_eq!(request.choices, vec!["Keep it"]);
        assert_eq!(request.avoided, vec!["Return it"]);
    }

    #[test]
    fn test_analyze_request_defaults() {
        let json = r#"{"themes":"space"}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.personality_mode, PersonalityMode::Savage);
        assert!(request.choices.is_empty());
        assert!(request.avoided.is_empty());
    }
}
