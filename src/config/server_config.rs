use log::warn;
use reqwest::Url;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::{env, str::FromStr};

use super::ConfigError;
use crate::{
    constants::{
        DEFAULT_ACTION_ICON, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOLANA_RPC_TIMEOUT_SECONDS,
        DEFAULT_SOLANA_RPC_URL, DEFAULT_STATE_TREE, DEFAULT_TRANSFER_RECIPIENT,
    },
    models::{AmountScaling, Scale},
};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Ledger RPC endpoint.
    pub rpc_url: String,
    pub rpc_timeout_seconds: u64,
    pub commitment: CommitmentConfig,
    /// Destination of the simple transfer action.
    pub recipient: Pubkey,
    /// State tree that receives compressed token accounts.
    pub state_tree: Pubkey,
    pub metadata_uri: String,
    pub icon_url: String,
    /// Origin granted expanded preflight permissions, if any.
    pub cors_allowed_origin: Option<String>,
    pub scaling: AmountScaling,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url =
            env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_SOLANA_RPC_URL.to_string());
        Url::parse(&rpc_url).map_err(|e| ConfigError::InvalidUrl {
            name: "SOLANA_RPC_URL".to_string(),
            value: rpc_url.clone(),
            reason: e.to_string(),
        })?;

        let scaling = AmountScaling {
            mint_to: scale_from_env("MINT_AMOUNT_SCALING")?,
            compress: scale_from_env("COMPRESS_AMOUNT_SCALING")?,
        };
        if !scaling.is_symmetric() {
            warn!(
                "Mint-to and compress steps use different amount scaling ({} vs {})",
                scaling.mint_to, scaling.compress
            );
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            rpc_url,
            rpc_timeout_seconds: env::var("SOLANA_RPC_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_SOLANA_RPC_TIMEOUT_SECONDS),
            commitment: commitment_from_env()?,
            recipient: pubkey_from_env("TRANSFER_RECIPIENT", DEFAULT_TRANSFER_RECIPIENT)?,
            state_tree: pubkey_from_env("COMPRESSION_STATE_TREE", DEFAULT_STATE_TREE)?,
            metadata_uri: env::var("TOKEN_METADATA_URI").unwrap_or_default(),
            icon_url: env::var("ACTION_ICON_URL")
                .unwrap_or_else(|_| DEFAULT_ACTION_ICON.to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty()),
            scaling,
        })
    }
}

fn pubkey_from_env(name: &str, default: &str) -> Result<Pubkey, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    Pubkey::from_str(value.trim()).map_err(|e| ConfigError::InvalidPubkey {
        name: name.to_string(),
        value,
        reason: e.to_string(),
    })
}

fn commitment_from_env() -> Result<CommitmentConfig, ConfigError> {
    let value = env::var("SOLANA_COMMITMENT").unwrap_or_else(|_| "confirmed".to_string());
    match value.to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(ConfigError::InvalidValue {
            name: "SOLANA_COMMITMENT".to_string(),
            value,
        }),
    }
}

fn scale_from_env(name: &str) -> Result<Scale, ConfigError> {
    match env::var(name) {
        Ok(value) => Scale::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(Scale::BaseUnits),
    }
}
