use crate::application::config::Config;
use crate::application::notify::{LogSpeaker, Speaker};
use crate::error::AppError;
use crate::session::gate::SessionGate;
use crate::session::store::{FileTokenStore, TokenStore};
use crate::transport::http_client::{ApiClient, HttpApiClient};
use std::sync::Arc;

/// Dependencies shared by every page
#[derive(Clone)]
pub struct AppContext {
    /// Backend client
    pub api: Arc<dyn ApiClient>,
    /// Token and disclaimer persistence
    pub store: Arc<dyn TokenStore>,
    /// Configuration
    pub config: Arc<Config>,
    /// Text-to-speech output
    pub speaker: Arc<dyn Speaker>,
}

impl AppContext {
    /// Context from explicit parts
    pub fn new(
        api: Arc<dyn ApiClient>,
        store: Arc<dyn TokenStore>,
        config: Arc<Config>,
        speaker: Arc<dyn Speaker>,
    ) -> Self {
        Self {
            api,
            store,
            config,
            speaker,
        }
    }

    /// Production context: HTTP client, file-backed store, logging speaker
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let api = Arc::new(HttpApiClient::new(config.clone())?);
        let store = Arc::new(FileTokenStore::open(&config.session.store_path)?);
        Ok(Self::new(api, store, config, Arc::new(LogSpeaker)))
    }

    /// Session gate over the context's store
    #[must_use]
    pub fn gate(&self) -> SessionGate {
        SessionGate::new(self.store.clone())
    }
}
