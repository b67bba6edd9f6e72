//! Token program instruction helpers.
//!
//! The mint strategies either create a plain SPL Token mint or a Token-2022
//! mint carrying a metadata pointer to itself. [`SolanaToken`] covers what the
//! two programs share; metadata instructions only exist on [`Token2022`].
mod spl_token;
mod token_2022;

use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id, instruction::create_associated_token_account,
};
use thiserror::Error;

use crate::domain::InstructionStep;

pub use spl_token::SplToken;
pub use token_2022::{token_metadata_len, Token2022};

/// Error types for token instruction construction
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Failed to build {step} instruction: {reason}")]
    InstructionError {
        step: InstructionStep,
        reason: String,
    },
    #[error("Invalid mint layout: {0}")]
    InvalidLayout(String),
}

/// Operations shared by the SPL Token and Token-2022 programs.
pub trait SolanaToken: Send + Sync {
    /// Get the program ID for this token type
    fn program_id(&self) -> Pubkey;

    /// Size in bytes of a mint account created by this program.
    fn mint_space(&self) -> Result<usize, TokenError>;

    /// Get the associated token address for a wallet and mint
    fn get_associated_token_address(&self, wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(wallet, mint, &self.program_id())
    }

    /// Create an associated token account instruction
    fn create_associated_token_account(
        &self,
        payer: &Pubkey,
        wallet: &Pubkey,
        mint: &Pubkey,
    ) -> Instruction {
        create_associated_token_account(payer, wallet, mint, &self.program_id())
    }

    /// Initialize a freshly created mint account.
    fn initialize_mint(
        &self,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Instruction, TokenError>;

    /// Mint `amount` base units into `destination`.
    fn mint_to(
        &self,
        mint: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, TokenError>;
}

/// Returns the token program a mint is created under.
pub fn token_program_for(with_metadata: bool) -> Box<dyn SolanaToken> {
    if with_metadata {
        Box::new(Token2022)
    } else {
        Box::new(SplToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_program_for() {
        assert_eq!(token_program_for(false).program_id(), ::spl_token::id());
        assert_eq!(token_program_for(true).program_id(), spl_token_2022::id());
    }

    #[test]
    fn test_associated_token_address_depends_on_program() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let classic = SplToken.get_associated_token_address(&wallet, &mint);
        let extended = Token2022.get_associated_token_address(&wallet, &mint);

        assert_ne!(classic, extended);
        assert_eq!(
            classic,
            spl_associated_token_account::get_associated_token_address(&wallet, &mint)
        );
    }

    #[test]
    fn test_create_associated_token_account_targets_ata_program() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ix = Token2022.create_associated_token_account(&payer, &payer, &mint);

        assert_eq!(ix.program_id, spl_associated_token_account::id());
        assert_eq!(
            ix.accounts[1].pubkey,
            Token2022.get_associated_token_address(&payer, &mint)
        );
    }
}
