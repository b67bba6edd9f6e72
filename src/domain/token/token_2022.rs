use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    instruction as token_2022_instruction,
    state::Mint,
};
use spl_token_metadata_interface::{instruction as metadata_instruction, state::TokenMetadata};

use super::{SolanaToken, TokenError};
use crate::domain::InstructionStep;

pub struct Token2022;

impl Token2022 {
    /// Points the mint's metadata at the mint account itself.
    pub fn initialize_metadata_pointer(
        &self,
        mint: &Pubkey,
        authority: &Pubkey,
    ) -> Result<Instruction, TokenError> {
        metadata_pointer::instruction::initialize(
            &self.program_id(),
            mint,
            Some(*authority),
            Some(*mint),
        )
        .map_err(|e| TokenError::InstructionError {
            step: InstructionStep::InitializeMetadataPointer,
            reason: e.to_string(),
        })
    }

    /// Writes name, symbol and uri into the mint's metadata extension.
    pub fn initialize_metadata(
        &self,
        mint: &Pubkey,
        authority: &Pubkey,
        name: &str,
        symbol: &str,
        uri: &str,
    ) -> Instruction {
        metadata_instruction::initialize(
            &self.program_id(),
            mint,
            authority,
            mint,
            authority,
            name.to_string(),
            symbol.to_string(),
            uri.to_string(),
        )
    }
}

impl SolanaToken for Token2022 {
    fn program_id(&self) -> Pubkey {
        spl_token_2022::id()
    }

    /// Mint plus the metadata pointer extension. The metadata entry itself is
    /// appended by the token program on initialization.
    fn mint_space(&self) -> Result<usize, TokenError> {
        ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])
            .map_err(|e| TokenError::InvalidLayout(e.to_string()))
    }

    fn initialize_mint(
        &self,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Instruction, TokenError> {
        token_2022_instruction::initialize_mint2(
            &self.program_id(),
            mint,
            mint_authority,
            freeze_authority,
            decimals,
        )
        .map_err(|e| TokenError::InstructionError {
            step: InstructionStep::InitializeMint,
            reason: e.to_string(),
        })
    }

    fn mint_to(
        &self,
        mint: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, TokenError> {
        token_2022_instruction::mint_to(
            &self.program_id(),
            mint,
            destination,
            authority,
            &[],
            amount,
        )
        .map_err(|e| TokenError::InstructionError {
            step: InstructionStep::MintTo,
            reason: e.to_string(),
        })
    }
}

/// Bytes the token metadata extension occupies once initialized with empty
/// additional metadata, TLV header included.
pub fn token_metadata_len(name: &str, symbol: &str, uri: &str) -> Result<usize, TokenError> {
    // Authorities are fixed-size, so their values do not affect the length.
    let metadata = TokenMetadata {
        name: name.to_string(),
        symbol: symbol.to_string(),
        uri: uri.to_string(),
        ..Default::default()
    };
    metadata.tlv_size_of().map_err(|e| TokenError::InstructionError {
        step: InstructionStep::InitializeMetadata,
        reason: e.to_string(),
    })
}
