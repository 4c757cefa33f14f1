use chrono::{DateTime, Utc};

/// Article polarity as a whole percentage, e.g. `0.456` -> `46%`
#[must_use]
pub fn format_polarity(polarity: f64) -> String {
    format!("{:.0}%", polarity * 100.0)
}

/// Aggregate sentiment score with one decimal, e.g. `0.1234` -> `12.3%`
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Age of an article relative to `now`
///
/// Missing or future dates read `Recently`.
#[must_use]
pub fn relative_time(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(published) = published else {
        return "Recently".to_string();
    };
    let elapsed = now - published;
    if elapsed.num_seconds() < 0 {
        return "Recently".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if elapsed.num_seconds() < 45 {
        "less than a minute ago".to_string()
    } else if minutes < 45 {
        format!("{} ago", plural(minutes.max(1), "minute"))
    } else if hours < 24 {
        format!("about {} ago", plural(hours.max(1), "hour"))
    } else if days < 30 {
        format!("{} ago", plural(days, "day"))
    } else if days < 365 {
        format!("{} ago", plural(days / 30, "month"))
    } else {
        format!("about {} ago", plural(days / 365, "year"))
    }
}
