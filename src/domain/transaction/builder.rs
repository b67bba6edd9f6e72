use log::{debug, info};
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair, signer::Signer,
};
use std::sync::Arc;

use super::{
    encode, finalize, InstructionSequencer, InstructionStep, MintStateQuery, NetworkStateFetcher,
    SequencerConfig,
};
use crate::{
    config::ServerConfig,
    domain::{validate_account, BuildParams, CompressedTokenProgram},
    models::{
        AmountScaling, BuildQuery, BuildStrategy, EncodedSerializedTransaction,
        TransactionBuildError,
    },
    services::SolanaProviderTrait,
};

/// Settings a [`TransactionBuilder`] is constructed with.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub recipient: Pubkey,
    pub state_tree: Pubkey,
    pub metadata_uri: String,
    pub scaling: AmountScaling,
    pub commitment: CommitmentConfig,
}

impl From<&ServerConfig> for BuilderConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            recipient: config.recipient,
            state_tree: config.state_tree,
            metadata_uri: config.metadata_uri.clone(),
            scaling: config.scaling,
            commitment: config.commitment,
        }
    }
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuiltTransaction {
    pub strategy: BuildStrategy,
    pub transaction: EncodedSerializedTransaction,
    /// Address of the mint created by the transaction, if any.
    pub mint: Option<Pubkey>,
    pub steps: Vec<InstructionStep>,
    pub last_valid_block_height: u64,
}

impl BuiltTransaction {
    /// Human readable summary returned next to the transaction.
    pub fn message(&self) -> String {
        match self.mint {
            Some(mint) => format!(
                "Mint {mint} will be created, minted to your account and compressed"
            ),
            None => "Transfer ready to sign".to_string(),
        }
    }
}

pub struct TransactionBuilder<P: SolanaProviderTrait> {
    fetcher: NetworkStateFetcher<P>,
    sequencer: InstructionSequencer,
    scaling: AmountScaling,
}

impl<P: SolanaProviderTrait> TransactionBuilder<P> {
    pub fn new(provider: Arc<P>, config: BuilderConfig) -> Result<Self, TransactionBuildError> {
        let compression = CompressedTokenProgram::mainnet()?;
        let sequencer = InstructionSequencer::new(
            SequencerConfig {
                recipient: config.recipient,
                state_tree: config.state_tree,
                metadata_uri: config.metadata_uri,
            },
            compression,
        );

        Ok(Self {
            fetcher: NetworkStateFetcher::new(provider, config.commitment),
            sequencer,
            scaling: config.scaling,
        })
    }

    /// Builds a partially signed transaction for `raw_account`.
    ///
    /// The account and parameters are validated before any network call is
    /// made.
    pub async fn build(
        &self,
        strategy: BuildStrategy,
        raw_account: &str,
        query: &BuildQuery,
    ) -> Result<BuiltTransaction, TransactionBuildError> {
        let caller = validate_account(raw_account)?;
        let params = BuildParams::resolve(strategy, query, &self.scaling)?;
        debug!("Building {strategy} for {caller} with {params:?}");

        // The mint keypair exists only for the duration of this build.
        let mint_keypair = Keypair::new();
        let layout = match &params {
            BuildParams::Mint(mint) => {
                Some(
                    self.sequencer
                        .mint_layout(mint, &caller, mint_keypair.pubkey())?,
                )
            }
            BuildParams::Transfer(_) => None,
        };

        let mint_query = layout.map(|layout| MintStateQuery {
            rent_space: layout.rent_space,
            associated_token_account: layout.associated_token_account,
        });
        let state = self.fetcher.fetch(mint_query.as_ref()).await?;

        let instructions = self
            .sequencer
            .sequence(&caller, &params, layout.as_ref(), &state)?;

        let signers: Vec<&Keypair> = match layout {
            Some(_) => vec![&mint_keypair],
            None => vec![],
        };
        let transaction = finalize(
            &instructions.instructions(),
            &caller,
            state.blockhash,
            &signers,
        )?;

        let built = BuiltTransaction {
            strategy,
            transaction: encode(&transaction)?,
            mint: layout.map(|layout| layout.mint),
            steps: instructions.steps(),
            last_valid_block_height: state.last_valid_block_height,
        };
        info!(
            "Built {strategy} transaction for {caller}: {} instructions, valid until block height {}",
            built.steps.len(),
            built.last_valid_block_height
        );

        Ok(built)
    }
}
