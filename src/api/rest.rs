use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::api::{AuthSession, AuthToken, JournalApi, Registration};
use crate::config::Config;
use crate::models::{Bias, Review, ReviewDraft, Rule, RuleDraft, TradeRecord};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The backend's `message` field from an error body, if it sent one.
pub fn api_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = Url::parse(cfg.api_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL {}", cfg.api_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API URL {} cannot take a path", cfg.api_url);
        }

        Ok(Self { client, base_url })
    }

    /// Base URL plus `segments`, each percent-encoded as a single segment,
    /// so an id holding `/` or `?` cannot change the route.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API URL {} cannot take a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&AuthToken>,
    ) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);

        let req = self.client.request(method, url);
        Ok(match token {
            Some(token) => req.header("Authorization", token.bearer()),
            None => req,
        })
    }

    async fn execute(req: RequestBuilder, fallback: &str) -> Result<Response> {
        let resp = req.send().await.with_context(|| fallback.to_string())?;
        Self::check(resp, fallback).await
    }

    async fn check(resp: Response, fallback: &str) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = api_message(&body).unwrap_or_else(|| fallback.to_string());
        anyhow::bail!("{} ({})", message, status)
    }

    async fn parse<T: DeserializeOwned>(resp: Response, segments: &[&str]) -> Result<T> {
        resp.json()
            .await
            .with_context(|| format!("Failed to parse response from /{}", segments.join("/")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        segments: &[&str],
        fallback: &str,
    ) -> Result<T> {
        let req = self.request(Method::GET, segments, Some(token))?;
        let resp = Self::execute(req, fallback).await?;
        Self::parse(resp, segments).await
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        token: Option<&AuthToken>,
        segments: &[&str],
        body: &B,
        fallback: &str,
    ) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(method, segments, token)?.json(body);
        let resp = Self::execute(req, fallback).await?;
        Self::parse(resp, segments).await
    }

    async fn delete(&self, token: &AuthToken, segments: &[&str], fallback: &str) -> Result<()> {
        let req = self.request(Method::DELETE, segments, Some(token))?;
        Self::execute(req, fallback).await?;
        Ok(())
    }
}

#[async_trait]
impl JournalApi for RestClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let session: AuthSession = self
            .send_json(
                Method::POST,
                None,
                &["auth", "login"],
                &LoginRequest { email, password },
                "Login failed",
            )
            .await?;

        info!("Logged in as {}", session.user.email);
        Ok(session)
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession> {
        let session: AuthSession = self
            .send_json(
                Method::POST,
                None,
                &["auth", "register"],
                registration,
                "Registration failed",
            )
            .await?;

        info!("Registered {}", session.user.email);
        Ok(session)
    }

    async fn fetch_trades(&self, token: &AuthToken) -> Result<Vec<TradeRecord>> {
        self.get_json(token, &["trades", "user", "all"], "Failed to fetch trades")
            .await
    }

    async fn fetch_trade(&self, token: &AuthToken, id: &str) -> Result<TradeRecord> {
        self.get_json(token, &["trades", id], "Failed to fetch trade").await
    }

    async fn delete_trade(&self, token: &AuthToken, id: &str) -> Result<()> {
        self.delete(token, &["trades", id], "Failed to delete trade").await
    }

    async fn fetch_biases(&self, token: &AuthToken) -> Result<Vec<Bias>> {
        self.get_json(token, &["bias", "user"], "Failed to fetch biases").await
    }

    async fn delete_bias(&self, token: &AuthToken, id: &str) -> Result<()> {
        self.delete(token, &["bias", id], "Failed to delete bias").await
    }

    async fn fetch_rules(&self, token: &AuthToken) -> Result<Vec<Rule>> {
        self.get_json(token, &["rules"], "Failed to fetch rules").await
    }

    async fn fetch_rule(&self, token: &AuthToken, id: &str) -> Result<Rule> {
        self.get_json(token, &["rules", id], "Failed to fetch rule").await
    }

    async fn create_rule(&self, token: &AuthToken, draft: &RuleDraft) -> Result<Rule> {
        self.send_json(Method::POST, Some(token), &["rules"], draft, "Failed to create rule")
            .await
    }

    async fn update_rule(&self, token: &AuthToken, id: &str, draft: &RuleDraft) -> Result<Rule> {
        self.send_json(Method::PUT, Some(token), &["rules", id], draft, "Failed to update rule")
            .await
    }

    async fn delete_rule(&self, token: &AuthToken, id: &str) -> Result<()> {
        self.delete(token, &["rules", id], "Failed to delete rule").await
    }

    async fn fetch_reviews(&self, token: &AuthToken) -> Result<Vec<Review>> {
        self.get_json(token, &["reviews"], "Error fetching reviews").await
    }

    async fn fetch_review(&self, token: &AuthToken, id: &str) -> Result<Review> {
        self.get_json(token, &["reviews", id], "Error fetching review").await
    }

    async fn create_review(&self, token: &AuthToken, draft: &ReviewDraft) -> Result<Review> {
        self.send_json(Method::POST, Some(token), &["reviews"], draft, "Error creating review")
            .await
    }

    async fn update_review(
        &self,
        token: &AuthToken,
        id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review> {
        self.send_json(
            Method::PUT,
            Some(token),
            &["reviews", id],
            draft,
            "Error updating review",
        )
        .await
    }

    async fn delete_review(&self, token: &AuthToken, id: &str) -> Result<()> {
        self.delete(token, &["reviews", id], "Error deleting review").await
    }
}
