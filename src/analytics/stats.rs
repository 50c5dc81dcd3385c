use serde::{Deserialize, Serialize};

use crate::analytics::pnl::{normalized_pnl, round2};
use crate::models::TradeRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total_trades: usize,
    /// Whole percent, 0..=100.
    pub win_rate: u32,
    pub net_pnl: f64,
    /// Mean R-multiple, unrounded.
    pub avg_r: f64,
}

/// Sum in ascending `total_cmp` order. Float addition is not associative,
/// so a fixed order makes the total independent of input order.
pub(crate) fn ordered_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Headline numbers for a set of trades.
///
/// A trade wins when its P&L is strictly positive. R is P&L over the
/// absolute entry price, and counts as 0 for a zero entry.
pub fn compute_statistics(trades: &[TradeRecord]) -> SummaryStatistics {
    let total_trades = trades.len();
    if total_trades == 0 {
        return SummaryStatistics::default();
    }

    let mut wins = 0usize;
    let mut pnls = Vec::with_capacity(total_trades);
    let mut rs = Vec::with_capacity(total_trades);

    for t in trades {
        let p = normalized_pnl(t);
        if p > 0.0 {
            wins += 1;
        }
        pnls.push(p);
        rs.push(if t.entry_price != 0.0 {
            p / t.entry_price.abs()
        } else {
            0.0
        });
    }

    SummaryStatistics {
        total_trades,
        win_rate: (wins as f64 / total_trades as f64 * 100.0).round() as u32,
        net_pnl: round2(ordered_sum(pnls)),
        avg_r: ordered_sum(rs) / total_trades as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeDirection;
    use crate::test_helpers::trade;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            compute_statistics(&[]),
            SummaryStatistics {
                total_trades: 0,
                win_rate: 0,
                net_pnl: 0.0,
                avg_r: 0.0,
            }
        );
    }

    #[test]
    fn test_two_winners() {
        let trades = vec![
            trade(100.0, 110.0, 10.0, TradeDirection::Buy, "2025-01-15"),
            trade(50.0, 40.0, 5.0, TradeDirection::Sell, "2025-02-01"),
        ];
        let s = compute_statistics(&trades);
        assert_eq!(s.total_trades, 2);
        assert_eq!(s.win_rate, 100);
        assert_eq!(s.net_pnl, 150.0);
        assert!((s.avg_r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_breakeven_is_not_a_win() {
        let trades = vec![
            trade(100.0, 110.0, 1.0, TradeDirection::Buy, "2025-01-15"),
            trade(100.0, 100.0, 1.0, TradeDirection::Buy, "2025-01-16"),
            trade(100.0, 95.0, 1.0, TradeDirection::Buy, "2025-01-17"),
        ];
        let s = compute_statistics(&trades);
        // 1 of 3 = 33.33%
        assert_eq!(s.win_rate, 33);
        assert_eq!(s.net_pnl, 5.0);
    }

    #[test]
    fn test_win_rate_rounds_half_up() {
        // 1 of 8 = 12.5% -> 13
        let mut trades = vec![trade(10.0, 11.0, 1.0, TradeDirection::Buy, "2025-03-01")];
        for _ in 0..7 {
            trades.push(trade(10.0, 9.0, 1.0, TradeDirection::Buy, "2025-03-02"));
        }
        assert_eq!(compute_statistics(&trades).win_rate, 13);
    }

    #[test]
    fn test_zero_entry_contributes_zero_r() {
        let trades = vec![
            trade(0.0, 0.0, 1.0, TradeDirection::Buy, "2025-03-01").with_profit_loss(25.0),
            trade(200.0, 210.0, 2.0, TradeDirection::Buy, "2025-03-01"),
        ];
        let s = compute_statistics(&trades);
        // r = [0, 20/200] -> avg 0.05
        assert!((s.avg_r - 0.05).abs() < 1e-12);
        assert_eq!(s.net_pnl, 45.0);
        assert_eq!(s.win_rate, 100);
    }

    #[test]
    fn test_negative_entry_uses_absolute_value() {
        let t = trade(-20.0, -10.0, 1.0, TradeDirection::Buy, "2025-03-01");
        let s = compute_statistics(&[t]);
        assert!((s.avg_r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_net_pnl_rounded_avg_r_not() {
        let trades = vec![
            trade(7.0, 7.0, 1.0, TradeDirection::Buy, "2025-03-01").with_profit_loss(0.1),
            trade(7.0, 7.0, 1.0, TradeDirection::Buy, "2025-03-01").with_profit_loss(0.2),
        ];
        let s = compute_statistics(&trades);
        // 0.1 + 0.2 is 0.30000000000000004 before rounding
        assert_eq!(s.net_pnl, 0.3);
        assert!((s.avg_r - 0.3 / 14.0).abs() < 1e-12);
        assert_ne!(s.avg_r, round2(s.avg_r));
    }

    #[test]
    fn test_fractional_pnl_same_in_any_order() {
        let make = |pnls: &[f64]| -> Vec<TradeRecord> {
            pnls.iter()
                .map(|&p| trade(1.0, 1.0, 1.0, TradeDirection::Buy, "2025-03-01").with_profit_loss(p))
                .collect()
        };
        let forward = compute_statistics(&make(&[0.1, 0.2, 0.3]));
        let backward = compute_statistics(&make(&[0.3, 0.2, 0.1]));
        let shuffled = compute_statistics(&make(&[0.2, 0.3, 0.1]));
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_ordered_sum() {
        assert_eq!(ordered_sum(vec![0.3, 0.2, 0.1]), ordered_sum(vec![0.1, 0.2, 0.3]));
        assert_eq!(ordered_sum(Vec::new()), 0.0);
    }
}
