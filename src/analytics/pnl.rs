use crate::models::TradeRecord;

/// Round to cents, half away from zero, after nudging by `f64::EPSILON` so
/// values like 1.005 that sit just below the half-cent in binary still round up.
pub fn round2(x: f64) -> f64 {
    ((x + f64::EPSILON) * 100.0).round() / 100.0
}

/// Signed profit/loss of a trade.
///
/// A precomputed `profit_loss` is returned untouched. Otherwise the value is
/// `(exit - entry) * quantity`, negated for sells, rounded to cents.
pub fn normalized_pnl(trade: &TradeRecord) -> f64 {
    match trade.profit_loss {
        Some(pnl) => pnl,
        None => {
            let raw = (trade.exit_price - trade.entry_price)
                * trade.quantity
                * trade.direction.sign();
            round2(raw)
        }
    }
}
