use solana_sdk::{instruction::Instruction, program_pack::Pack, pubkey::Pubkey};
use spl_token::{instruction as spl_token_instruction, state::Mint};

use super::{SolanaToken, TokenError};
use crate::domain::InstructionStep;

pub struct SplToken;

impl SolanaToken for SplToken {
    fn program_id(&self) -> Pubkey {
        spl_token::id()
    }

    fn mint_space(&self) -> Result<usize, TokenError> {
        Ok(Mint::LEN)
    }

    fn initialize_mint(
        &self,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Instruction, TokenError> {
        spl_token_instruction::initialize_mint2(
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
        spl_token_instruction::mint_to(
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

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::program_option::COption;
    use spl_token::instruction::TokenInstruction;

    #[test]
    fn test_mint_space_is_plain_mint() {
        assert_eq!(SplToken.mint_space().unwrap(), 82);
    }

    #[test]
    fn test_mint_to_encodes_amount() {
        let mint = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ix = SplToken
            .mint_to(&mint, &destination, &authority, 1_000_000_000_000)
            .unwrap();

        assert_eq!(ix.program_id, spl_token::id());
        match TokenInstruction::unpack(&ix.data).unwrap() {
            TokenInstruction::MintTo { amount } => assert_eq!(amount, 1_000_000_000_000),
            other => panic!("unexpected instruction {other:?}"),
        }
    }

    #[test]
    fn test_initialize_mint_sets_authorities() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ix = SplToken
            .initialize_mint(&mint, &authority, Some(&authority), 6)
            .unwrap();

        match TokenInstruction::unpack(&ix.data).unwrap() {
            TokenInstruction::InitializeMint2 {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                assert_eq!(decimals, 6);
                assert_eq!(mint_authority, authority);
                assert_eq!(freeze_authority, COption::Some(authority));
            }
            other => panic!("unexpected instruction {other:?}"),
        }
    }
}
