use log::debug;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey};
use std::sync::Arc;

use crate::{models::TransactionBuildError, services::SolanaProviderTrait};

/// What a mint build needs to know before sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintStateQuery {
    /// Bytes the mint account must be funded for.
    pub rent_space: usize,
    pub associated_token_account: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintNetworkState {
    pub rent_lamports: u64,
    pub associated_token_account_exists: bool,
}

/// Ledger state read at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkState {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
    pub mint: Option<MintNetworkState>,
}

/// Reads rent, account existence and the latest blockhash for a build.
///
/// Calls are issued one after another and never retried. The blockhash is
/// requested last so its validity window starts as late as possible.
pub struct NetworkStateFetcher<P: SolanaProviderTrait> {
    provider: Arc<P>,
    commitment: CommitmentConfig,
}

impl<P: SolanaProviderTrait> NetworkStateFetcher<P> {
    pub fn new(provider: Arc<P>, commitment: CommitmentConfig) -> Self {
        Self {
            provider,
            commitment,
        }
    }

    pub async fn fetch(
        &self,
        mint: Option<&MintStateQuery>,
    ) -> Result<NetworkState, TransactionBuildError> {
        let mint = match mint {
            Some(query) => Some(self.fetch_mint_state(query).await?),
            None => None,
        };

        let (blockhash, last_valid_block_height) = self
            .provider
            .get_latest_blockhash_with_commitment(self.commitment)
            .await?;
        debug!("Fetched blockhash {blockhash}, valid until block height {last_valid_block_height}");

        Ok(NetworkState {
            blockhash,
            last_valid_block_height,
            mint,
        })
    }

    async fn fetch_mint_state(
        &self,
        query: &MintStateQuery,
    ) -> Result<MintNetworkState, TransactionBuildError> {
        let rent_lamports = self
            .provider
            .get_minimum_balance_for_rent_exemption(query.rent_space)
            .await?;

        let associated_token_account_exists = self
            .provider
            .get_account_with_commitment(&query.associated_token_account, self.commitment)
            .await?
            .is_some();
        debug!(
            "Rent for {} bytes is {rent_lamports} lamports, token account {} exists: {associated_token_account_exists}",
            query.rent_space, query.associated_token_account
        );

        Ok(MintNetworkState {
            rent_lamports,
            associated_token_account_exists,
        })
    }
}
