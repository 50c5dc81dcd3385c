use serde::Serialize;
use std::fmt;

use crate::analytics::{
    compute_statistics, monthly_series, normalized_pnl, MonthlySeriesPoint, SummaryStatistics,
    WeekBucket,
};
use crate::models::{Dated, TradeRecord};

pub const DEFAULT_RECENT_TRADES: usize = 8;

/// `-$1,234.5`: sign, dollar, thousands separators, at most two decimals
/// with trailing zeros dropped.
pub fn format_currency(num: f64) -> String {
    let sign = if num < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, frac)
    }
}

/// Home-screen read model, rebuilt from a fresh snapshot of trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: SummaryStatistics,
    pub monthly: Vec<MonthlySeriesPoint>,
    /// Leading trades of the snapshot, in the order the API returned them.
    pub recent: Vec<TradeRecord>,
}

impl Dashboard {
    pub fn build(trades: &[TradeRecord]) -> Self {
        Self::build_with_recent(trades, DEFAULT_RECENT_TRADES)
    }

    pub fn build_with_recent(trades: &[TradeRecord], recent: usize) -> Self {
        Self {
            stats: compute_statistics(trades),
            monthly: monthly_series(trades),
            recent: trades.iter().take(recent).cloned().collect(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "─".repeat(35);

        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(f, "  TRADING JOURNAL")?;
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(f, "  QUICK STATS")?;
        writeln!(f, "  {}", rule)?;
        writeln!(f, "  Net P&L:     {}", format_currency(self.stats.net_pnl))?;
        writeln!(f, "  Win Rate:    {}%", self.stats.win_rate)?;
        writeln!(f, "  Avg R:       {:.2}R", self.stats.avg_r)?;
        writeln!(f, "  Total:       {}", self.stats.total_trades)?;

        if !self.monthly.is_empty() {
            writeln!(f)?;
            writeln!(f, "  MONTHLY P&L")?;
            writeln!(f, "  {}", rule)?;
            for point in &self.monthly {
                writeln!(f, "  {}:  {}", point.period, format_currency(point.pnl))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "  RECENT TRADES")?;
        writeln!(f, "  {}", rule)?;
        if self.recent.is_empty() {
            writeln!(f, "  No trades available.")?;
        }
        for t in &self.recent {
            writeln!(
                f,
                "  {} {:<10} {:<4} {} -> {} | {}",
                t.created_at.format("%Y-%m-%d"),
                t.symbol,
                t.direction.as_str(),
                t.entry_price,
                t.exit_price,
                format_currency(normalized_pnl(t))
            )?;
        }
        writeln!(f, "{}", "=".repeat(70))
    }
}

/// Week-grouped listing for biases, rules or reviews.
pub fn render_weeks<T, F>(heading: &str, weeks: &[WeekBucket<'_, T>], describe: F) -> String
where
    T: Dated,
    F: Fn(&T) -> String,
{
    let mut lines = vec![
        format!("  {}", heading.to_uppercase()),
        format!("  {}", "─".repeat(35)),
    ];
    if weeks.is_empty() {
        lines.push("  Nothing recorded yet.".to_string());
    }
    for week in weeks {
        lines.push(format!("  Week of {} ({})", week.label, week.len()));
        lines.extend(week.members.iter().map(|m| format!("    - {}", describe(*m))));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
