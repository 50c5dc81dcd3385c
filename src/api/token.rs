use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
    #[serde(default)]
    sub: Option<String>,
}

/// A bearer token issued by the journal backend.
///
/// The client never verifies the signature (only the server holds the
/// key); it reads `exp` so a stale credential is caught before any request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    fn claims(&self) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(&self.0, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .context("Failed to decode auth token")
    }

    /// `None` when the token carries no `exp` claim.
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .claims()?
            .exp
            .and_then(|ts| DateTime::from_timestamp(ts, 0)))
    }

    pub fn subject(&self) -> Result<Option<String>> {
        Ok(self.claims()?.sub)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> Result<bool> {
        Ok(self.expires_at()?.is_some_and(|exp| exp <= now))
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
