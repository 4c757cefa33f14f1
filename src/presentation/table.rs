//! Box-drawn tables of widget state for terminal front-ends

use crate::constants::ALLOCATION_BUCKETS;
use crate::model::market::MarketSnapshot;
use crate::model::news::Article;
use crate::model::portfolio::{Holding, LedgerEntry};
use crate::presentation::market::{Direction, format_change, format_price};
use crate::presentation::news::{format_polarity, relative_time};
use chrono::{DateTime, Utc};
use prettytable::format;
use prettytable::{Cell, Row, Table};

fn table_with_header(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
    table
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Price ticker
#[must_use]
pub fn quotes_table(snapshot: &MarketSnapshot) -> Table {
    let mut table = table_with_header(&["SYMBOL", "PRICE", "CHANGE", ""]);
    for (symbol, quote) in &snapshot.quotes {
        let price = match quote.currency.as_deref() {
            Some(currency) => format!("{currency}{}", format_price(quote.price)),
            None => format_price(quote.price),
        };
        let marker = if quote.is_simulated() { "sim" } else { "" };
        table.add_row(Row::new(vec![
            Cell::new(&format!("{} {}", Direction::of(quote.change), symbol)),
            Cell::new(&price),
            Cell::new(&format_change(quote)),
            Cell::new(marker),
        ]));
    }
    table
}

/// Headlines with sentiment and age
#[must_use]
pub fn news_table(articles: &[Article], now: DateTime<Utc>) -> Table {
    let mut table = table_with_header(&["TITLE", "SOURCE", "SENTIMENT", "PUBLISHED"]);
    for article in articles {
        let sentiment = match &article.sentiment_analysis {
            Some(score) => format!("{} {}", score.label, format_polarity(score.polarity)),
            None => "-".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new(&truncate(&article.title, 60)),
            Cell::new(article.source_name()),
            Cell::new(&sentiment),
            Cell::new(&relative_time(article.published(), now)),
        ]));
    }
    table
}

/// Rebalance ledger, in the order given
#[must_use]
pub fn ledger_table(entries: &[LedgerEntry]) -> Table {
    let mut table = table_with_header(&["TX", "ACTION", "TIME", "STATUS"]);
    for entry in entries {
        table.add_row(Row::new(vec![
            Cell::new(&format!("{}...", entry.tx_id)),
            Cell::new(&entry.action),
            Cell::new(&entry.at.format("%H:%M:%S").to_string()),
            Cell::new(&entry.status.to_uppercase()),
        ]));
    }
    table
}

/// Holdings with value and weight
#[must_use]
pub fn holdings_table(holdings: &[Holding]) -> Table {
    let mut table = table_with_header(&["SYMBOL", "NAME", "VALUE", "WEIGHT"]);
    for holding in holdings {
        table.add_row(Row::new(vec![
            Cell::new(&holding.symbol),
            Cell::new(&holding.name),
            Cell::new(&format!("${}", format_price(holding.value))),
            Cell::new(&format!("{:.1}%", holding.weight * 100.0)),
        ]));
    }
    table
}

/// Allocation chart as bucket/percent rows
#[must_use]
pub fn allocation_table(weights: &[f64]) -> Table {
    let mut table = table_with_header(&["BUCKET", "WEIGHT"]);
    for (bucket, weight) in ALLOCATION_BUCKETS.iter().zip(weights) {
        table.add_row(Row::new(vec![
            Cell::new(bucket),
            Cell::new(&format!("{weight:.0}%")),
        ]));
    }
    table
}
