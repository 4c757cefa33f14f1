/// Environment-driven configuration
pub mod config;
/// Throttling of outgoing requests
pub mod rate_limiter;

/// Idle/in-flight controls of user commands
pub mod commands;
/// Dependencies shared by the pages
pub mod context;
/// Per-widget fetchers
pub mod fetcher;
/// Toasts and speech
pub mod notify;
/// Pages and navigation
pub mod pages;
/// Fixed-cadence polling
pub mod scheduler;
/// Explicit application state
pub mod state;
/// Voice command interpretation
pub mod voice;
/// Typed widget view state
pub mod widget;
