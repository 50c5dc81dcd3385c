pub mod rest;
pub mod token;

pub use rest::RestClient;
pub use token::AuthToken;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Bias, Review, ReviewDraft, Rule, RuleDraft, TradeRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, with = "crate::models::timestamp::iso_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Sign-up form. The backend checks that the two passwords match.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: AuthToken,
    pub user: User,
}

/// The journal backend. Every call takes the caller's current token; nothing
/// is cached between calls, so a fresh login takes effect immediately.
#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;
    async fn register(&self, registration: &Registration) -> Result<AuthSession>;

    async fn fetch_trades(&self, token: &AuthToken) -> Result<Vec<TradeRecord>>;
    async fn fetch_trade(&self, token: &AuthToken, id: &str) -> Result<TradeRecord>;
    async fn delete_trade(&self, token: &AuthToken, id: &str) -> Result<()>;

    async fn fetch_biases(&self, token: &AuthToken) -> Result<Vec<Bias>>;
    async fn delete_bias(&self, token: &AuthToken, id: &str) -> Result<()>;

    async fn fetch_rules(&self, token: &AuthToken) -> Result<Vec<Rule>>;
    async fn fetch_rule(&self, token: &AuthToken, id: &str) -> Result<Rule>;
    async fn create_rule(&self, token: &AuthToken, draft: &RuleDraft) -> Result<Rule>;
    async fn update_rule(&self, token: &AuthToken, id: &str, draft: &RuleDraft) -> Result<Rule>;
    async fn delete_rule(&self, token: &AuthToken, id: &str) -> Result<()>;

    async fn fetch_reviews(&self, token: &AuthToken) -> Result<Vec<Review>>;
    async fn fetch_review(&self, token: &AuthToken, id: &str) -> Result<Review>;
    async fn create_review(&self, token: &AuthToken, draft: &ReviewDraft) -> Result<Review>;
    async fn update_review(
        &self,
        token: &AuthToken,
        id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review>;
    async fn delete_review(&self, token: &AuthToken, id: &str) -> Result<()>;
}
