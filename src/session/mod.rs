/// Login and logout
pub mod auth;
/// Presence check run before protected pages
pub mod gate;
/// Persistence of the token and disclaimer flag
pub mod store;

pub use auth::Auth;
pub use gate::{GateDecision, Session, SessionGate};
pub use store::{FileTokenStore, MemoryTokenStore, StoredState, TokenStore};
