use borsh::BorshSerialize;
#[cfg(test)]
use borsh::BorshDeserialize;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{anchor_discriminator, CompressedTokenProgram, CompressionError};
use crate::{
    constants::{CREATE_TOKEN_POOL_INSTRUCTION, TRANSFER_INSTRUCTION},
    domain::InstructionStep,
};

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
#[allow(dead_code)]
struct CompressedProof {
    a: [u8; 32],
    b: [u8; 64],
    c: [u8; 32],
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
#[allow(dead_code)]
struct DelegatedTransfer {
    owner: [u8; 32],
    delegate_change_account_index: Option<u8>,
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
#[allow(dead_code)]
struct PackedMerkleContext {
    merkle_tree_pubkey_index: u8,
    nullifier_queue_pubkey_index: u8,
    leaf_index: u32,
    prove_by_index: bool,
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
#[allow(dead_code)]
struct InputTokenDataWithContext {
    amount: u64,
    delegate_index: Option<u8>,
    merkle_context: PackedMerkleContext,
    root_index: u16,
    lamports: Option<u64>,
    tlv: Option<Vec<u8>>,
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
struct PackedTokenTransferOutputData {
    owner: [u8; 32],
    amount: u64,
    lamports: Option<u64>,
    /// Index into the remaining accounts of the transfer instruction.
    merkle_tree_index: u8,
    tlv: Option<Vec<u8>>,
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
#[allow(dead_code)]
struct CompressedCpiContext {
    set_context: bool,
    first_set_context: bool,
    cpi_context_account_index: u8,
}

#[derive(BorshSerialize, Debug, PartialEq)]
#[cfg_attr(test, derive(BorshDeserialize))]
struct CompressedTokenInstructionDataTransfer {
    proof: Option<CompressedProof>,
    mint: [u8; 32],
    delegated_transfer: Option<DelegatedTransfer>,
    input_token_data_with_context: Vec<InputTokenDataWithContext>,
    output_compressed_accounts: Vec<PackedTokenTransferOutputData>,
    is_compress: bool,
    compress_or_decompress_amount: Option<u64>,
    cpi_context: Option<CompressedCpiContext>,
    lamports_change_account_merkle_tree_index: Option<u8>,
}

/// Accounts and amount of a compress call.
#[derive(Debug, Clone, Copy)]
pub struct CompressParams {
    pub fee_payer: Pubkey,
    /// Owner of `source_token_account`; signs the transfer into the pool.
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub source_token_account: Pubkey,
    pub token_program: Pubkey,
    pub state_tree: Pubkey,
    /// Owner of the compressed token account that is created.
    pub owner: Pubkey,
    pub amount: u64,
}

impl CompressedTokenProgram {
    /// Creates the token pool for `mint`, registering it with the
    /// compressed-token program.
    pub fn create_token_pool_instruction(
        &self,
        fee_payer: &Pubkey,
        mint: &Pubkey,
        token_program: &Pubkey,
    ) -> Instruction {
        let accounts = vec![
            AccountMeta::new(*fee_payer, true),
            AccountMeta::new(self.token_pool_pda(mint), false),
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*token_program, false),
            AccountMeta::new_readonly(self.cpi_authority_pda(), false),
        ];

        Instruction {
            program_id: self.program_id,
            accounts,
            data: anchor_discriminator(CREATE_TOKEN_POOL_INSTRUCTION).to_vec(),
        }
    }

    /// Moves `amount` from an SPL token account into a single compressed
    /// token account in `state_tree`.
    pub fn compress_instruction(
        &self,
        params: &CompressParams,
    ) -> Result<Instruction, CompressionError> {
        let inputs = CompressedTokenInstructionDataTransfer {
            proof: None,
            mint: params.mint.to_bytes(),
            delegated_transfer: None,
            input_token_data_with_context: Vec::new(),
            output_compressed_accounts: vec![PackedTokenTransferOutputData {
                owner: params.owner.to_bytes(),
                amount: params.amount,
                lamports: None,
                merkle_tree_index: 0,
                tlv: None,
            }],
            is_compress: true,
            compress_or_decompress_amount: Some(params.amount),
            cpi_context: None,
            lamports_change_account_merkle_tree_index: None,
        };

        let serialization_error = |e: std::io::Error| CompressionError::Serialization {
            step: InstructionStep::Compress,
            reason: e.to_string(),
        };
        let inputs = borsh::to_vec(&inputs).map_err(serialization_error)?;
        // `transfer` takes its arguments as a single `Vec<u8>`.
        let args = borsh::to_vec(&inputs).map_err(serialization_error)?;

        let mut data = anchor_discriminator(TRANSFER_INSTRUCTION).to_vec();
        data.extend_from_slice(&args);

        let accounts = vec![
            AccountMeta::new(params.fee_payer, true),
            AccountMeta::new_readonly(params.authority, true),
            AccountMeta::new_readonly(self.cpi_authority_pda(), false),
            AccountMeta::new_readonly(self.light_system_program, false),
            AccountMeta::new_readonly(self.registered_program_pda(), false),
            AccountMeta::new_readonly(self.noop_program, false),
            AccountMeta::new_readonly(self.account_compression_authority(), false),
            AccountMeta::new_readonly(self.account_compression_program, false),
            AccountMeta::new_readonly(self.program_id, false),
            AccountMeta::new(self.token_pool_pda(&params.mint), false),
            AccountMeta::new(params.source_token_account, false),
            AccountMeta::new_readonly(params.token_program, false),
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            // remaining accounts
            AccountMeta::new(params.state_tree, false),
        ];

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress_params() -> CompressParams {
        let caller = Pubkey::new_unique();
        CompressParams {
            fee_payer: caller,
            authority: caller,
            mint: Pubkey::new_unique(),
            source_token_account: Pubkey::new_unique(),
            token_program: spl_token::id(),
            state_tree: Pubkey::new_unique(),
            owner: caller,
            amount: 1_000_000_000_000,
        }
    }

    #[test]
    fn test_create_token_pool_accounts() {
        let programs = CompressedTokenProgram::mainnet().unwrap();
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ix = programs.create_token_pool_instruction(&payer, &mint, &spl_token::id());

        assert_eq!(ix.program_id, programs.program_id);
        assert_eq!(ix.data, anchor_discriminator("create_token_pool").to_vec());
        assert_eq!(ix.accounts.len(), 6);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, programs.token_pool_pda(&mint));
        assert_eq!(ix.accounts[3].pubkey, mint);
        assert_eq!(ix.accounts[4].pubkey, spl_token::id());
        assert_eq!(ix.accounts[5].pubkey, programs.cpi_authority_pda());
    }

    #[test]
    fn test_compress_instruction_data() {
        let programs = CompressedTokenProgram::mainnet().unwrap();
        let params = compress_params();

        let ix = programs.compress_instruction(&params).unwrap();

        assert_eq!(&ix.data[..8], &anchor_discriminator("transfer"));
        let inputs = Vec::<u8>::try_from_slice(&ix.data[8..]).unwrap();
        let decoded = CompressedTokenInstructionDataTransfer::try_from_slice(&inputs).unwrap();

        assert!(decoded.is_compress);
        assert_eq!(decoded.mint, params.mint.to_bytes());
        assert_eq!(decoded.compress_or_decompress_amount, Some(params.amount));
        assert!(decoded.input_token_data_with_context.is_empty());
        assert_eq!(decoded.output_compressed_accounts.len(), 1);
        assert_eq!(
            decoded.output_compressed_accounts[0].owner,
            params.owner.to_bytes()
        );
        assert_eq!(decoded.output_compressed_accounts[0].amount, params.amount);
    }

    #[test]
    fn test_compress_instruction_accounts() {
        let programs = CompressedTokenProgram::mainnet().unwrap();
        let params = compress_params();

        let ix = programs.compress_instruction(&params).unwrap();

        assert_eq!(ix.accounts.len(), 14);
        assert!(ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[1].pubkey, params.authority);
        assert_eq!(ix.accounts[9].pubkey, programs.token_pool_pda(&params.mint));
        assert!(ix.accounts[9].is_writable);
        assert_eq!(ix.accounts[10].pubkey, params.source_token_account);
        let state_tree = ix.accounts.last().unwrap();
        assert_eq!(state_tree.pubkey, params.state_tree);
        assert!(state_tree.is_writable);
    }
}
