use async_trait::async_trait;
use eyre::Result;
use riskwatch_core::auth::{TokenStorage, TokenStore};
use riskwatch_core::config::Settings;
use std::sync::Arc;

use crate::error::Error;

pub mod login;
pub mod logout;
pub mod messages;
pub mod settings;
pub mod token;

#[async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Effective settings after file, environment and flag overrides.
#[derive(Clone)]
pub struct CommandContext {
    pub settings: Settings,
    token_storage: Option<Arc<dyn TokenStorage>>,
}

impl CommandContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            token_storage: None,
        }
    }

    /// Use `storage` instead of the backend named in the settings.
    pub fn with_token_storage(settings: Settings, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            settings,
            token_storage: Some(storage),
        }
    }

    pub fn token_store(&self) -> std::result::Result<TokenStore, Error> {
        match &self.token_storage {
            Some(storage) => Ok(TokenStore::new(storage.clone())),
            None => Ok(self.settings.token_store()?),
        }
    }
}
