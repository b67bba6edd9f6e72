//! Solana Provider Module
//!
//! This module provides an abstraction layer over the Solana RPC client,
//! exposing the read-only queries the transaction builder depends on: the
//! minimum balance for rent exemption, the latest blockhash with its last
//! valid block height, and account lookups.
//!
//! The provider uses the non-blocking `RpcClient`. Every call is a single
//! attempt; failures surface as [`SolanaProviderError`] and are never retried
//! here.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Url;
use serde::Serialize;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the Solana provider.
#[derive(Error, Debug, Serialize, PartialEq)]
pub enum SolanaProviderError {
    /// Network/IO error (connection issues, timeouts)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// RPC protocol error returned by the node
    #[error("RPC error: {0}")]
    RpcError(String),

    /// HTTP request error with status code
    #[error("Request error (HTTP {status_code}): {error}")]
    RequestError { error: String, status_code: u16 },

    /// Network configuration error
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
}

impl SolanaProviderError {
    /// Classifies a Solana RPC client error into the appropriate error variant.
    pub fn from_rpc_error(error: ClientError) -> Self {
        match error.kind() {
            ClientErrorKind::Io(_) => SolanaProviderError::NetworkError(error.to_string()),

            ClientErrorKind::Reqwest(reqwest_err) => match reqwest_err.status() {
                Some(status) => SolanaProviderError::RequestError {
                    error: error.to_string(),
                    status_code: status.as_u16(),
                },
                // No status code: connection refused, DNS failure, timeout
                None => SolanaProviderError::NetworkError(error.to_string()),
            },

            _ => SolanaProviderError::RpcError(error.to_string()),
        }
    }
}

/// A trait that abstracts the Solana queries used to build transactions.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait SolanaProviderTrait: Send + Sync {
    /// Retrieves the minimum balance required for rent exemption for the specified data size.
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_size: usize,
    ) -> Result<u64, SolanaProviderError>;

    /// Retrieves the latest blockhash and its last valid block height.
    async fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), SolanaProviderError>;

    /// Retrieves an account, or `None` when it does not exist.
    async fn get_account_with_commitment(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<Option<Account>, SolanaProviderError>;
}

pub struct SolanaProvider {
    client: RpcClient,
    // Default timeout in seconds
    timeout_seconds: Duration,
    // Default commitment level
    commitment: CommitmentConfig,
}

impl std::fmt::Debug for SolanaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaProvider")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("commitment", &self.commitment)
            .finish()
    }
}

impl SolanaProvider {
    /// Creates a new SolanaProvider for a single RPC endpoint.
    ///
    /// # Arguments
    ///
    /// * `url` - The RPC endpoint URL
    /// * `timeout_seconds` - Transport timeout applied to every call
    /// * `commitment` - Default commitment level
    pub fn new_with_commitment(
        url: &str,
        timeout_seconds: u64,
        commitment: CommitmentConfig,
    ) -> Result<Self, SolanaProviderError> {
        let rpc_url: Url = url.parse().map_err(|e| {
            SolanaProviderError::NetworkConfiguration(format!("Invalid URL format: {e}"))
        })?;
        let timeout = Duration::from_secs(timeout_seconds);

        Ok(Self {
            client: RpcClient::new_with_timeout_and_commitment(
                rpc_url.to_string(),
                timeout,
                commitment,
            ),
            timeout_seconds: timeout,
            commitment,
        })
    }
}

#[async_trait]
impl SolanaProviderTrait for SolanaProvider {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_size: usize,
    ) -> Result<u64, SolanaProviderError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_size)
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }

    async fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<(Hash, u64), SolanaProviderError> {
        self.client
            .get_latest_blockhash_with_commitment(commitment)
            .await
            .map_err(SolanaProviderError::from_rpc_error)
    }

    async fn get_account_with_commitment(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<Option<Account>, SolanaProviderError> {
        self.client
            .get_account_with_commitment(pubkey, commitment)
            .await
            .map(|response| response.value)
            .map_err(SolanaProviderError::from_rpc_error)
    }
}
