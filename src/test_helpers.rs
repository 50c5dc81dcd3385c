use crate::models::{parse_timestamp, Bias, Rule, TradeDirection, TradeRecord};

/// A trade with the given prices, created at `created_at` (any accepted timestamp form).
pub fn trade(
    entry: f64,
    exit: f64,
    quantity: f64,
    direction: TradeDirection,
    created_at: &str,
) -> TradeRecord {
    TradeRecord::new(
        entry,
        exit,
        quantity,
        direction,
        parse_timestamp(created_at).unwrap(),
    )
}

pub fn rule(id: &str, created_at: &str) -> Rule {
    Rule {
        id: id.to_string(),
        title: format!("rule {}", id),
        expression: String::new(),
        created_at: parse_timestamp(created_at).unwrap(),
    }
}

pub fn bias(id: &str, created_at: &str) -> Bias {
    Bias {
        id: id.to_string(),
        title: format!("bias {}", id),
        currency_pair: "EURUSD".to_string(),
        description: None,
        before_image_url: None,
        after_image_url: None,
        created_at: parse_timestamp(created_at).unwrap(),
    }
}
