//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is required; `tags` may be an empty list but not `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
}

impl SearchParams {
    /// Build from decoded query pairs. When `term` is repeated the first one wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let term = pairs
            .into_iter()
            .find(|(key, _)| key == "term")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { term }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_every_field() {
        let missing_tags = r#"{"title":"t","content":"c","category":"k"}"#;
        assert!(serde_json::from_str::<PostRequest>(missing_tags).is_err());

        let null_tags = r#"{"title":"t","content":"c","category":"k","tags":null}"#;
        assert!(serde_json::from_str::<PostRequest>(null_tags).is_err());

        let mistyped = r#"{"title":1,"content":"c","category":"k","tags":[]}"#;
        assert!(serde_json::from_str::<PostRequest>(mistyped).is_err());
    }

    #[test]
    fn request_accepts_empty_tag_list() {
        let body = r#"{"title":"t","content":"c","category":"k","tags":[]}"#;
        let req: PostRequest = serde_json::from_str(body).unwrap();
        assert!(req.tags.is_empty());
    }

    #[test]
    fn response_uses_snake_case_timestamps() {
        let ts = NaiveDateTime::parse_from_str("2024-05-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let json = serde_json::to_value(PostResponse {
            id: 7,
            title: "t".into(),
            content: "c".into(),
            category: "k".into(),
            tags: vec!["x".into()],
            created_at: ts,
            updated_at: ts,
        })
        .unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["tags"][0], "x");
        assert_eq!(json["created_at"], "2024-05-01T10:00:00");
        assert_eq!(json["updated_at"], json["created_at"]);
    }

    #[test]
    fn search_term_defaults_to_empty() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.term, "");
        assert_eq!(SearchParams::from_pairs(Vec::new()).term, "");
    }

    #[test]
    fn first_repeated_term_wins() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("term".to_string(), "go".to_string()),
            ("term".to_string(), "x".to_string()),
        ];
        assert_eq!(SearchParams::from_pairs(pairs).term, "go");
    }
}
