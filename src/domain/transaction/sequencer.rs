use log::debug;
use solana_sdk::pubkey::Pubkey;
use solana_system_interface::instruction as system_instruction;

use super::{InstructionSet, InstructionStep, NetworkState};
use crate::{
    domain::{
        token_metadata_len, token_program_for, BuildParams, CompressParams,
        CompressedTokenProgram, MintParams, Token2022, TransferParams,
    },
    models::TransactionBuildError,
};

#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Destination of simple transfers.
    pub recipient: Pubkey,
    /// State tree that receives compressed token accounts.
    pub state_tree: Pubkey,
    pub metadata_uri: String,
}

/// Addresses and sizes of a mint build, fixed before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintLayout {
    pub mint: Pubkey,
    pub token_program: Pubkey,
    /// Allocated size of the mint account.
    pub space: usize,
    /// Size the account is funded for. Exceeds `space` when token metadata is
    /// appended after creation.
    pub rent_space: usize,
    pub associated_token_account: Pubkey,
}

/// Emits the instructions of a build in dependency order.
pub struct InstructionSequencer {
    config: SequencerConfig,
    compression: CompressedTokenProgram,
}

impl InstructionSequencer {
    pub fn new(config: SequencerConfig, compression: CompressedTokenProgram) -> Self {
        Self {
            config,
            compression,
        }
    }

    pub fn mint_layout(
        &self,
        params: &MintParams,
        caller: &Pubkey,
        mint: Pubkey,
    ) -> Result<MintLayout, TransactionBuildError> {
        let token = token_program_for(params.metadata.is_some());
        let space = token.mint_space()?;
        let rent_space = match &params.metadata {
            Some(metadata) => {
                space
                    + token_metadata_len(
                        &metadata.name,
                        &metadata.symbol,
                        &self.config.metadata_uri,
                    )?
            }
            None => space,
        };

        Ok(MintLayout {
            mint,
            token_program: token.program_id(),
            space,
            rent_space,
            associated_token_account: token.get_associated_token_address(caller, &mint),
        })
    }

    pub fn sequence(
        &self,
        caller: &Pubkey,
        params: &BuildParams,
        layout: Option<&MintLayout>,
        state: &NetworkState,
    ) -> Result<InstructionSet, TransactionBuildError> {
        let set = match (params, layout) {
            (BuildParams::Transfer(transfer), _) => self.sequence_transfer(caller, transfer),
            (BuildParams::Mint(mint), Some(layout)) => {
                self.sequence_mint(caller, mint, layout, state)?
            }
            (BuildParams::Mint(_), None) => {
                return Err(TransactionBuildError::InstructionConstruction {
                    step: InstructionStep::CreateAccount.to_string(),
                    reason: "mint layout missing".to_string(),
                })
            }
        };

        set.validate_order()?;
        debug!("Sequenced {} instructions: {:?}", set.len(), set.steps());
        Ok(set)
    }

    fn sequence_transfer(&self, caller: &Pubkey, params: &TransferParams) -> InstructionSet {
        let mut set = InstructionSet::new();
        set.push(
            InstructionStep::Transfer,
            system_instruction::transfer(caller, &self.config.recipient, params.lamports),
        );
        set
    }

    fn sequence_mint(
        &self,
        caller: &Pubkey,
        params: &MintParams,
        layout: &MintLayout,
        state: &NetworkState,
    ) -> Result<InstructionSet, TransactionBuildError> {
        let mint_state = state
            .mint
            .ok_or_else(|| TransactionBuildError::InstructionConstruction {
                step: InstructionStep::CreateAccount.to_string(),
                reason: "rent was not fetched".to_string(),
            })?;
        let token = token_program_for(params.metadata.is_some());
        let mint = &layout.mint;
        let mut set = InstructionSet::new();

        set.push(
            InstructionStep::CreateAccount,
            system_instruction::create_account(
                caller,
                mint,
                mint_state.rent_lamports,
                layout.space as u64,
                &layout.token_program,
            ),
        );

        if params.metadata.is_some() {
            set.push(
                InstructionStep::InitializeMetadataPointer,
                Token2022.initialize_metadata_pointer(mint, caller)?,
            );
        }

        set.push(
            InstructionStep::InitializeMint,
            token.initialize_mint(mint, caller, Some(caller), params.decimals)?,
        );

        if let Some(metadata) = &params.metadata {
            set.push(
                InstructionStep::InitializeMetadata,
                Token2022.initialize_metadata(
                    mint,
                    caller,
                    &metadata.name,
                    &metadata.symbol,
                    &self.config.metadata_uri,
                ),
            );
        }

        set.push(
            InstructionStep::CreateTokenPool,
            self.compression
                .create_token_pool_instruction(caller, mint, &layout.token_program),
        );

        if !mint_state.associated_token_account_exists {
            set.push(
                InstructionStep::CreateAssociatedTokenAccount,
                token.create_associated_token_account(caller, caller, mint),
            );
        }

        set.push(
            InstructionStep::MintTo,
            token.mint_to(
                mint,
                &layout.associated_token_account,
                caller,
                params.mint_amount,
            )?,
        );

        set.push(
            InstructionStep::Compress,
            self.compression.compress_instruction(&CompressParams {
                fee_payer: *caller,
                authority: *caller,
                mint: *mint,
                source_token_account: layout.associated_token_account,
                token_program: layout.token_program,
                state_tree: self.config.state_tree,
                owner: *caller,
                amount: params.compress_amount,
            })?,
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MintNetworkState, TokenMetadataParams};
    use solana_sdk::hash::Hash;
    use spl_token::instruction::TokenInstruction;

    fn sequencer() -> InstructionSequencer {
        InstructionSequencer::new(
            SequencerConfig {
                recipient: Pubkey::new_unique(),
                state_tree: Pubkey::new_unique(),
                metadata_uri: "https://example.com/token.json".to_string(),
            },
            CompressedTokenProgram::mainnet().unwrap(),
        )
    }

    fn mint_params(metadata: bool) -> MintParams {
        MintParams {
            decimals: 9,
            amount: 1000.0,
            supply: 1000.0,
            mint_amount: 1_000_000_000_000,
            compress_amount: 1_000_000_000_000,
            metadata: metadata.then(|| TokenMetadataParams {
                name: "Compressed Token".to_string(),
                symbol: "CTKN".to_string(),
            }),
        }
    }

    fn state(ata_exists: bool) -> NetworkState {
        NetworkState {
            blockhash: Hash::new_unique(),
            last_valid_block_height: 100,
            mint: Some(MintNetworkState {
                rent_lamports: 1_461_600,
                associated_token_account_exists: ata_exists,
            }),
        }
    }

    fn sequence_mint(metadata: bool, ata_exists: bool) -> (InstructionSet, MintLayout, Pubkey) {
        let sequencer = sequencer();
        let caller = Pubkey::new_unique();
        let params = mint_params(metadata);
        let layout = sequencer
            .mint_layout(&params, &caller, Pubkey::new_unique())
            .unwrap();
        let set = sequencer
            .sequence(
                &caller,
                &BuildParams::Mint(params),
                Some(&layout),
                &state(ata_exists),
            )
            .unwrap();
        (set, layout, caller)
    }

    #[test]
    fn test_transfer_is_single_instruction() {
        let sequencer = sequencer();
        let caller = Pubkey::new_unique();
        let state = NetworkState {
            mint: None,
            ..state(false)
        };

        let set = sequencer
            .sequence(
                &caller,
                &BuildParams::Transfer(TransferParams {
                    amount_sol: 0.1,
                    lamports: 100_000_000,
                }),
                None,
                &state,
            )
            .unwrap();

        assert_eq!(set.steps(), vec![InstructionStep::Transfer]);
        let ix = set.get(InstructionStep::Transfer).unwrap();
        assert_eq!(ix.accounts[0].pubkey, caller);
        assert_eq!(ix.accounts[1].pubkey, sequencer.config.recipient);
    }

    #[test]
    fn test_basic_mint_order() {
        let (set, layout, _) = sequence_mint(false, false);

        assert_eq!(
            set.steps(),
            vec![
                InstructionStep::CreateAccount,
                InstructionStep::InitializeMint,
                InstructionStep::CreateTokenPool,
                InstructionStep::CreateAssociatedTokenAccount,
                InstructionStep::MintTo,
                InstructionStep::Compress,
            ]
        );
        assert_eq!(layout.token_program, spl_token::id());
        assert_eq!(layout.space, layout.rent_space);
    }

    #[test]
    fn test_metadata_mint_order() {
        let (set, layout, _) = sequence_mint(true, false);

        assert_eq!(
            set.steps(),
            vec![
                InstructionStep::CreateAccount,
                InstructionStep::InitializeMetadataPointer,
                InstructionStep::InitializeMint,
                InstructionStep::InitializeMetadata,
                InstructionStep::CreateTokenPool,
                InstructionStep::CreateAssociatedTokenAccount,
                InstructionStep::MintTo,
                InstructionStep::Compress,
            ]
        );
        assert_eq!(layout.token_program, spl_token_2022::id());
        assert!(layout.rent_space > layout.space);
    }

    #[test]
    fn test_existing_token_account_is_not_recreated() {
        let (with_ata, _, _) = sequence_mint(false, true);
        let (without_ata, _, _) = sequence_mint(false, false);

        assert!(with_ata
            .get(InstructionStep::CreateAssociatedTokenAccount)
            .is_none());
        assert_eq!(
            without_ata
                .steps()
                .iter()
                .filter(|step| **step == InstructionStep::CreateAssociatedTokenAccount)
                .count(),
            1
        );
        assert_eq!(with_ata.len() + 1, without_ata.len());
    }

    #[test]
    fn test_mint_is_threaded_through_every_step() {
        let (set, layout, caller) = sequence_mint(false, false);

        let create = set.get(InstructionStep::CreateAccount).unwrap();
        assert_eq!(create.accounts[1].pubkey, layout.mint);
        assert!(create.accounts[1].is_signer);

        let mint_to = set.get(InstructionStep::MintTo).unwrap();
        assert_eq!(mint_to.accounts[0].pubkey, layout.mint);
        assert_eq!(mint_to.accounts[1].pubkey, layout.associated_token_account);
        assert_eq!(mint_to.accounts[2].pubkey, caller);

        let pool = set.get(InstructionStep::CreateTokenPool).unwrap();
        assert_eq!(pool.accounts[3].pubkey, layout.mint);
    }

    #[test]
    fn test_mint_to_amount_in_base_units() {
        let (set, _, _) = sequence_mint(false, false);

        let mint_to = set.get(InstructionStep::MintTo).unwrap();
        match TokenInstruction::unpack(&mint_to.data).unwrap() {
            TokenInstruction::MintTo { amount } => assert_eq!(amount, 1000 * 10u64.pow(9)),
            other => panic!("unexpected instruction {other:?}"),
        }
    }

    #[test]
    fn test_missing_mint_state_aborts() {
        let sequencer = sequencer();
        let caller = Pubkey::new_unique();
        let params = mint_params(false);
        let layout = sequencer
            .mint_layout(&params, &caller, Pubkey::new_unique())
            .unwrap();
        let state = NetworkState {
            mint: None,
            ..state(false)
        };

        let result = sequencer.sequence(&caller, &BuildParams::Mint(params), Some(&layout), &state);

        assert!(matches!(
            result,
            Err(TransactionBuildError::InstructionConstruction { .. })
        ));
    }
}
