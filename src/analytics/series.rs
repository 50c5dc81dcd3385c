use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::pnl::normalized_pnl;
use crate::analytics::stats::ordered_sum;
use crate::models::TradeRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeriesPoint {
    /// `YYYY-MM` of the trade's UTC timestamp.
    pub period: String,
    pub pnl: f64,
}

/// Net P&L per calendar month, oldest month first. Months without trades are
/// absent, not zero-filled.
pub fn monthly_series(trades: &[TradeRecord]) -> Vec<MonthlySeriesPoint> {
    // Zero-padded YYYY-MM sorts chronologically as a string
    let mut months: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for t in trades {
        let period = t.created_at.format("%Y-%m").to_string();
        months.entry(period).or_default().push(normalized_pnl(t));
    }

    months
        .into_iter()
        .map(|(period, pnls)| MonthlySeriesPoint {
            period,
            pnl: ordered_sum(pnls),
        })
        .collect()
}
