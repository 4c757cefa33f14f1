/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! # ALGORHYTHM Client
//!
//! Client side of the ALGORHYTHM portfolio product. The backend performs the
//! optimization, sentiment scoring and authentication; this crate keeps a set of
//! typed widgets in sync with it:
//!
//! - a session gate that checks for a stored credential token before a protected page opens
//! - data fetchers that replace a widget's view state on each successful response
//! - a polling scheduler that re-runs the fetchers on a fixed cadence per widget
//! - command handlers (optimize, shield, compare, predict) with an idle/in-flight control
//! - a voice command interpreter mapping transcripts to commands
//!
//! ## Example
//!
//! ```ignore
//! use algorhythm_client::prelude::*;
//!
//! setup_logger();
//! let ctx = AppContext::from_config(Config::new())?;
//! match Dashboard::open(&ctx, AppState::default()).await {
//!     PageEntry::Ready(dashboard) => {
//!         dashboard.optimize().await?;
//!     }
//!     PageEntry::Redirect(route) => println!("go to {route}"),
//! }
//! ```

/// Application layer: configuration, widgets, polling, commands and pages
pub mod application;
/// Global constants: endpoints, default intervals and labels
pub mod constants;
/// Crate error type
pub mod error;
/// Request and response models of the backend API
pub mod model;
/// Commonly used types
pub mod prelude;
/// Formatting and table rendering of view state
pub mod presentation;
/// Session token storage, gate and authentication
pub mod session;
/// HTTP transport towards the backend
pub mod transport;
/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
