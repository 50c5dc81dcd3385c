use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trading_journal::analytics::group_by_week_in;
use trading_journal::api::{AuthToken, JournalApi, RestClient};
use trading_journal::config::Config;
use trading_journal::dashboard::{render_weeks, Dashboard};

async fn resolve_token(cfg: &Config, api: &dyn JournalApi) -> Result<AuthToken> {
    let token = match (&cfg.token, &cfg.email, &cfg.password) {
        (Some(raw), _, _) => AuthToken::new(raw.as_str()),
        (None, Some(email), Some(password)) => api.login(email, password).await?.token,
        _ => anyhow::bail!("Set JOURNAL_TOKEN, or JOURNAL_EMAIL and JOURNAL_PASSWORD"),
    };

    match token.is_expired(Utc::now()) {
        Ok(true) => anyhow::bail!("Auth token has expired, log in again"),
        Ok(false) => {}
        Err(e) => warn!("Could not read token expiry: {:#}", e),
    }
    Ok(token)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    if let Some(e) = &cfg.timezone_error {
        warn!("{}, falling back to UTC", e);
    }

    let json_output = std::env::args().nth(1).is_some_and(|a| a == "--json");

    let api = RestClient::new(&cfg)?;
    let token = resolve_token(&cfg, &api).await?;

    info!("Fetching journal from {} (weeks in {})", cfg.api_url, cfg.timezone);
    let (trades, biases, rules, reviews) = tokio::try_join!(
        api.fetch_trades(&token),
        api.fetch_biases(&token),
        api.fetch_rules(&token),
        api.fetch_reviews(&token),
    )?;
    info!(
        "Loaded {} trades, {} biases, {} rules, {} reviews",
        trades.len(),
        biases.len(),
        rules.len(),
        reviews.len()
    );

    let dashboard = Dashboard::build_with_recent(&trades, cfg.recent_trades);
    let bias_weeks = group_by_week_in(&biases, &cfg.timezone);
    let rule_weeks = group_by_week_in(&rules, &cfg.timezone);
    let review_weeks = group_by_week_in(&reviews, &cfg.timezone);

    if json_output {
        let out = serde_json::json!({
            "dashboard": dashboard,
            "biases": bias_weeks,
            "rules": rule_weeks,
            "reviews": review_weeks,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("Failed to encode report")?
        );
        return Ok(());
    }

    dashboard.print_summary();
    println!();
    print!(
        "{}",
        render_weeks("biases", &bias_weeks, |b| format!("{} [{}]", b.title, b.currency_pair))
    );
    println!();
    print!("{}", render_weeks("rules", &rule_weeks, |r| r.title.clone()));
    println!();
    print!(
        "{}",
        render_weeks("reviews", &review_weeks, |r| format!("{}/5 {}", r.rating, r.review))
    );

    Ok(())
}
