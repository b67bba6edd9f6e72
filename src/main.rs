//! # Compressed Token Actions
//!
//! HTTP server answering Solana Actions requests.
//!
//! ## Startup
//!
//! 1. Load `.env` and the environment configuration
//! 2. Set up logging
//! 3. Connect the Solana RPC provider
//! 4. Serve the action routes
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use color_eyre::{eyre::WrapErr, Result};
use compressed_token_actions::{
    api::{middleware::CorsPolicy, routes::configure_routes},
    config::ServerConfig,
    constants::DEFAULT_SHUTDOWN_TIMEOUT_SECONDS,
    logging::setup_logging,
    models::AppState,
    services::SolanaProvider,
    utils::mask_url,
};
use dotenvy::dotenv;
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Load environment variables from .env file
    dotenv().ok();

    setup_logging()?;

    let config = ServerConfig::from_env().wrap_err("Failed to load configuration")?;
    info!(
        "Using Solana RPC {} with {}s timeout",
        mask_url(&config.rpc_url),
        config.rpc_timeout_seconds
    );

    let provider = SolanaProvider::new_with_commitment(
        &config.rpc_url,
        config.rpc_timeout_seconds,
        config.commitment,
    )
    .wrap_err("Failed to create Solana provider")?;
    let app_state = web::Data::new(
        AppState::new(Arc::new(provider), &config).wrap_err("Failed to initialize app state")?,
    );

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(CorsPolicy::default_headers())
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes::<SolanaProvider>)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS)
    .run()
    .await
    .wrap_err("Server error")
}
