/// Environment variable helpers
pub mod config;
/// Identifier generation
pub mod id;
/// Logging setup
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;
