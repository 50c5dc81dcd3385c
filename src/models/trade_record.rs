use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Session, TradeDirection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// A closed trade as the journal API returns it.
///
/// Only the price/size/direction/P&L/timestamp fields feed the analytics;
/// the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub entry_price: f64,
    #[serde(default)]
    pub exit_price: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "tradeDirection")]
    pub direction: TradeDirection,
    /// Authoritative when present; derived from prices otherwise.
    #[serde(default)]
    pub profit_loss: Option<f64>,
    #[serde(with = "crate::models::timestamp::iso")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_bias: Option<String>,
    #[serde(default)]
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_timeframe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl TradeRecord {
    /// A record with only the fields the analytics read; display fields empty.
    pub fn new(
        entry_price: f64,
        exit_price: f64,
        quantity: f64,
        direction: TradeDirection,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            symbol: String::new(),
            entry_price,
            exit_price,
            quantity,
            direction,
            profit_loss: None,
            created_at,
            strategy: None,
            session: None,
            daily_bias: None,
            result: String::new(),
            risk: None,
            reward: None,
            entry_timeframe: None,
            entry_structure: None,
            entry_setup: None,
            notes: None,
            error: false,
            error_reason: None,
            screenshot_url: None,
            tags: Vec::new(),
        }
    }

    pub fn with_profit_loss(mut self, pnl: f64) -> Self {
        self.profit_loss = Some(pnl);
        self
    }
}
