use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry that can be bucketed by its creation week.
pub trait Dated {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// A directional bias: before/after screenshots with commentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bias {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub currency_pair: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image_url: Option<String>,
    #[serde(with = "crate::models::timestamp::iso")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub expression: String,
    #[serde(with = "crate::models::timestamp::iso")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub review: String,
    #[serde(default)]
    pub error_check: bool,
    #[serde(default)]
    pub error_descriptions: Vec<String>,
    /// Self-assessed score. The backend stores any number.
    #[serde(default)]
    pub rating: f64,
    #[serde(with = "crate::models::timestamp::iso")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /rules` and `PUT /rules/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDraft {
    pub title: String,
    pub expression: String,
}

/// Body of `POST /reviews` and `PUT /reviews/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub review: String,
    pub error_check: bool,
    pub error_descriptions: Vec<String>,
    pub rating: f64,
}

macro_rules! impl_dated {
    ($($ty:ty),*) => {
        $(
            impl Dated for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )*
    };
}

impl_dated!(Bias, Rule, Review);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_from_api() {
        let json = r#"{
            "id": "b1",
            "title": "Cable bearish into NY",
            "currencyPair": "GBPUSD",
            "beforeImageUrl": "https://cdn.example/b1-before.png",
            "createdAt": "2025-10-15T07:45:00.000Z"
        }"#;
        let b: Bias = serde_json::from_str(json).unwrap();
        assert_eq!(b.id(), "b1");
        assert_eq!(b.currency_pair, "GBPUSD");
        assert!(b.after_image_url.is_none());
    }

    #[test]
    fn test_rule_and_review_from_api() {
        let rule: Rule = serde_json::from_str(
            r#"{"id": "r1", "title": "No trades before 8am", "expression": "hour >= 8", "createdAt": "2025-10-13"}"#,
        )
        .unwrap();
        assert_eq!(rule.id(), "r1");

        let review: Review = serde_json::from_str(
            r#"{"id": "v1", "review": "Chased entries", "errorCheck": true,
                "errorDescriptions": ["FOMO"], "rating": 2, "createdAt": "2025-10-19T20:00:00Z"}"#,
        )
        .unwrap();
        assert!(review.error_check);
        assert_eq!(review.error_descriptions, vec!["FOMO".to_string()]);
        assert_eq!(review.rating, 2.0);
    }

    #[test]
    fn test_review_draft_wire_names() {
        let draft = ReviewDraft {
            review: "Waited for the sweep".to_string(),
            error_check: false,
            error_descriptions: Vec::new(),
            rating: 4.5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["errorCheck"], false);
        assert_eq!(json["errorDescriptions"], serde_json::json!([]));
        assert_eq!(json["rating"], 4.5);
    }

    #[test]
    fn test_review_rating_accepts_fractions_and_large_values() {
        let review: Review = serde_json::from_str(
            r#"{"id": "v2", "review": "Patient", "rating": 4.5, "createdAt": "2025-10-20"}"#,
        )
        .unwrap();
        assert_eq!(review.rating, 4.5);

        let review: Review = serde_json::from_str(
            r#"{"id": "v3", "review": "Typo score", "rating": 300, "createdAt": "2025-10-20"}"#,
        )
        .unwrap();
        assert_eq!(review.rating, 300.0);
    }
}
