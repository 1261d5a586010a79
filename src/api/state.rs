use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        catalog::{CatalogProvider, TmdbClient},
        chat::ChatService,
        engine::{LocalePolicy, RecommendationEngine, RetryPolicy},
        intent::IntentParser,
        render::CardRenderer,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

impl AppState {
    /// Builds the chat service from configuration. A missing API key is
    /// not fatal here; the engine reports it on every turn instead.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider: Option<Arc<dyn CatalogProvider>> = match &config.tmdb_api_key {
            Some(key) => Some(Arc::new(TmdbClient::new(
                key.clone(),
                config.tmdb_api_url.clone(),
            )?)),
            None => None,
        };
        Ok(Self::with_provider(provider, config))
    }

    /// Assembles state around an arbitrary catalog provider, so tests can
    /// inject stubs without any network.
    pub fn with_provider(provider: Option<Arc<dyn CatalogProvider>>, config: &Config) -> Self {
        let locales = LocalePolicy {
            primary: config.primary_locale.clone(),
            secondary: config.secondary_locale.clone(),
        };
        let engine = RecommendationEngine::new(
            provider,
            IntentParser::default(),
            locales,
            RetryPolicy::default(),
        );
        let renderer = CardRenderer::new(config.image_base_url.clone());

        Self {
            chat: Arc::new(ChatService::new(engine, renderer)),
        }
    }
}
