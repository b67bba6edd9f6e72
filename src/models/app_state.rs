use std::sync::Arc;

use crate::{
    api::middleware::CorsPolicy,
    config::ServerConfig,
    domain::{BuilderConfig, TransactionBuilder},
    models::TransactionBuildError,
    services::SolanaProviderTrait,
};

/// Shared, immutable state of the action endpoints.
pub struct AppState<P: SolanaProviderTrait> {
    pub builder: TransactionBuilder<P>,
    pub icon_url: String,
    pub cors: CorsPolicy,
}

impl<P: SolanaProviderTrait> AppState<P> {
    pub fn new(provider: Arc<P>, config: &ServerConfig) -> Result<Self, TransactionBuildError> {
        Ok(Self {
            builder: TransactionBuilder::new(provider, BuilderConfig::from(config))?,
            icon_url: config.icon_url.clone(),
            cors: CorsPolicy::new(config.cors_allowed_origin.clone()),
        })
    }
}
