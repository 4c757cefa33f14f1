//! Pages of the product, each owning its widgets and controls

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis page: predictions and comparisons
pub mod analysis;
/// Main dashboard
pub mod dashboard;
/// Demo launcher
pub mod demo;
/// Login form
pub mod login;
/// News page and stock news panel
pub mod news;

pub use analysis::AnalysisPage;
pub use dashboard::{Dashboard, DashboardViews};
pub use demo::DemoPage;
pub use login::LoginPage;
pub use news::{NewsPage, StockNewsPanel};

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Landing page
    Landing,
    /// Login form
    Login,
    /// Demo launcher
    Demo,
    /// Main dashboard
    Dashboard,
    /// News page
    News,
    /// Analysis page
    Analysis,
}

impl Route {
    /// URL path of the page
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Demo => "/demo",
            Route::Dashboard => "/dashboard",
            Route::News => "/news",
            Route::Analysis => "/analysis",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Result of opening a page
pub enum PageEntry<P> {
    /// The page loaded
    Ready(P),
    /// The page refused to load; navigate to the route instead
    Redirect(Route),
}

impl<P> PageEntry<P> {
    /// The page, if it loaded
    pub fn ready(self) -> Option<P> {
        match self {
            PageEntry::Ready(page) => Some(page),
            PageEntry::Redirect(_) => None,
        }
    }

    /// Redirect target, if the page did not load
    pub fn redirect(&self) -> Option<Route> {
        match self {
            PageEntry::Ready(_) => None,
            PageEntry::Redirect(route) => Some(*route),
        }
    }
}

/// Outcome of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on the current page
    Stay,
    /// Navigate to the route
    GoTo(Route),
}

/// Loading flag and inline error of a foreground form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// A submission is running
    pub loading: bool,
    /// Inline error shown under the form
    pub error: Option<String>,
}

/// Trims and upper-cases a ticker; blank input is rejected
pub(crate) fn normalize_symbol(raw: &str) -> Result<String, AppError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::InvalidInput("symbol is required".to_string()));
    }
    Ok(symbol)
}
