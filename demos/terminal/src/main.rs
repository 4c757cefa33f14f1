use algorhythm_client::application::context::AppContext;
use algorhythm_client::application::pages::{Dashboard, DemoPage, Navigation, PageEntry};
use algorhythm_client::application::state::AppState;
use algorhythm_client::application::config::Config;
use algorhythm_client::presentation::market::format_valuation;
use algorhythm_client::presentation::news::format_score;
use algorhythm_client::presentation::table::{
    allocation_table, ledger_table, news_table, quotes_table,
};
use algorhythm_client::utils::logger::setup_logger;
use chrono::Utc;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info};

const RENDER_EVERY: Duration = Duration::from_secs(5);

async fn render(dashboard: &Dashboard) {
    let views = dashboard.views();
    let profile = dashboard.profile().await;
    println!("\nValuation {} | risk {}", format_valuation(profile.amount), profile.risk);

    if let Some(status) = views.market_status.get().await {
        println!("Market: {} ({})", status.status, if status.is_open { "open" } else { "closed" });
    }
    if let Some(snapshot) = views.quotes.get().await {
        quotes_table(&snapshot).printstd();
    }
    if let Some(sentiment) = views.sentiment.get().await {
        println!(
            "Sentiment: {} (score {}, {} articles)",
            sentiment.overall_sentiment,
            format_score(sentiment.sentiment_score),
            sentiment.news_count
        );
    }
    if let Some(headlines) = views.headlines.get().await {
        news_table(&headlines.articles, Utc::now()).printstd();
    }
    if let Some(weights) = views.allocation.get().await {
        allocation_table(&weights).printstd();
    }
    if let Some(reasoning) = views.reasoning.get().await {
        println!("AI reasoning: {reasoning}");
    }
    if let Some(ledger) = views.ledger.get().await.filter(|l| !l.is_empty()) {
        ledger_table(&ledger).printstd();
    }
    for notification in dashboard.notifier().active(Utc::now()) {
        println!("◈ {}", notification.message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let ctx = AppContext::from_config(Config::new())?;
    info!("Backend: {}", ctx.config.api.base_url);

    let mut entry = Dashboard::open(&ctx, AppState::default()).await;
    if entry.redirect().is_some() {
        info!("No stored session, launching the demo account");
        let mut demo = DemoPage::new(&ctx);
        if demo.launch().await == Navigation::Stay {
            let message = demo.form().error.clone().unwrap_or_default();
            error!("{}", message);
            return Err(message.into());
        }
        entry = Dashboard::open(&ctx, AppState::default()).await;
    }

    let PageEntry::Ready(dashboard) = entry else {
        return Err("dashboard refused to open".into());
    };

    if let Err(e) = dashboard.optimize().await {
        error!("Initial scan failed: {}", e);
    }

    let mut ticker = tokio::time::interval(RENDER_EVERY);
    loop {
        tokio::select! {
            _ = ticker.tick() => render(&dashboard).await,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                dashboard.close();
                break;
            }
        }
    }
    Ok(())
}
