//! Wire types for the insights backend.
//!
//! The backend exposes a single endpoint: `POST /api/insights` with a JSON
//! body naming the query mode and value, answered by repository metadata plus
//! AI-generated insights text. Every response field is optional; renderers
//! substitute fallbacks instead of failing on missing data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the backend should interpret the query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// A direct GitHub repository URL.
    #[default]
    Url,
    /// A natural-language description of the repository wanted.
    Search,
}

/// Errors that can occur while validating user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The trimmed input was empty. The display text is the user-facing
    /// status message.
    #[error("Please enter a value.")]
    Empty,
}

/// A validated submission: mode plus trimmed, non-empty value.
///
/// Created once per submission and discarded after the request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: QueryMode,
    pub value: String,
}

impl Query {
    /// Trims the input and rejects empty values.
    ///
    /// No further validation happens client-side; URL well-formedness is the
    /// backend's concern.
    pub fn new(mode: QueryMode, value: &str) -> Result<Self, QueryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self {
            mode,
            value: value.to_string(),
        })
    }
}

/// Request body for `POST /api/insights`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsRequest {
    #[serde(rename = "queryType")]
    pub query_type: QueryMode,
    pub value: String,
}

impl From<&Query> for InsightsRequest {
    fn from(query: &Query) -> Self {
        Self {
            query_type: query.mode,
            value: query.value.clone(),
        }
    }
}

/// Successful response payload. Both halves are independently optional; a
/// response of two nulls is valid and renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsightsResponse {
    #[serde(default)]
    pub repo: Option<RepoMetadata>,
    #[serde(default)]
    pub insights: Option<String>,
}

/// Repository metadata as the backend relays it from GitHub.
///
/// The backend flattens GitHub's nested shapes (e.g. `license` arrives as the
/// license name, not an object) and attaches a decoded README snippet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    /// Language name to byte count.
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub readme: Option<String>,
}

impl RepoMetadata {
    /// Display name, preferring the owner-qualified `full_name`.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_rejects_empty_input() {
        assert_eq!(Query::new(QueryMode::Url, ""), Err(QueryError::Empty));
        assert_eq!(Query::new(QueryMode::Search, "   "), Err(QueryError::Empty));
    }

    #[test]
    fn test_query_trims_value() {
        let query = Query::new(QueryMode::Search, "  flask boilerplate  ").unwrap();
        assert_eq!(query.value, "flask boilerplate");
    }

    #[test]
    fn test_validation_message_text() {
        assert_eq!(QueryError::Empty.to_string(), "Please enter a value.");
    }

    #[test]
    fn test_request_serializes_js_field_names() {
        let query = Query::new(QueryMode::Url, "https://github.com/pallets/flask").unwrap();
        let json = serde_json::to_value(InsightsRequest::from(&query)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queryType": "url",
                "value": "https://github.com/pallets/flask",
            })
        );
    }

    #[test]
    fn test_search_mode_serializes_lowercase() {
        let query = Query::new(QueryMode::Search, "socket.io boilerplate").unwrap();
        let json = serde_json::to_value(InsightsRequest::from(&query)).unwrap();
        assert_eq!(json["queryType"], "search");
    }

    #[test]
    fn test_response_tolerates_nulls() {
        let response: InsightsResponse =
            serde_json::from_str(r#"{"repo": null, "insights": null}"#).unwrap();
        assert!(response.repo.is_none());
        assert!(response.insights.is_none());
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: InsightsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, InsightsResponse::default());
    }

    #[test]
    fn test_repo_metadata_partial_payload() {
        let repo: RepoMetadata = serde_json::from_str(
            r#"{
                "full_name": "pallets/flask",
                "stargazers_count": 67000,
                "languages": {"Python": 1200345},
                "topics": ["wsgi", "web"],
                "unknown_field": true
            }"#,
        )
        .unwrap();
        assert_eq!(repo.display_name(), "pallets/flask");
        assert_eq!(repo.stargazers_count, Some(67000));
        assert_eq!(repo.languages.get("Python"), Some(&1200345));
        assert_eq!(repo.topics, vec!["wsgi", "web"]);
        assert!(repo.description.is_none());
        assert!(repo.readme.is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut repo = RepoMetadata {
            name: Some("flask".into()),
            ..RepoMetadata::default()
        };
        assert_eq!(repo.display_name(), "flask");

        repo.full_name = Some("pallets/flask".into());
        assert_eq!(repo.display_name(), "pallets/flask");

        assert_eq!(RepoMetadata::default().display_name(), "N/A");
    }
}
