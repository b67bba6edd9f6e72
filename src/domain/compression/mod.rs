//! Light Protocol compressed-token instructions.
//!
//! The compressed-token program is an Anchor program. Its instructions are
//! encoded by hand: an 8 byte discriminator followed by the borsh encoded
//! arguments.
mod instruction;

use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use thiserror::Error;

use crate::{
    constants::{
        ACCOUNT_COMPRESSION_PROGRAM_ID, COMPRESSED_TOKEN_PROGRAM_ID, CPI_AUTHORITY_PDA_SEED,
        LIGHT_SYSTEM_PROGRAM_ID, NOOP_PROGRAM_ID, POOL_SEED,
    },
    domain::InstructionStep,
};

pub use instruction::CompressParams;

#[derive(Debug, Error, PartialEq)]
pub enum CompressionError {
    #[error("Failed to serialize {step} instruction data: {reason}")]
    Serialization {
        step: InstructionStep,
        reason: String,
    },
    #[error("Invalid program id: {0}")]
    InvalidProgramId(String),
}

/// Program ids the compressed-token instructions reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedTokenProgram {
    pub program_id: Pubkey,
    pub light_system_program: Pubkey,
    pub account_compression_program: Pubkey,
    pub noop_program: Pubkey,
}

impl CompressedTokenProgram {
    /// Program ids of the mainnet-beta deployment.
    pub fn mainnet() -> Result<Self, CompressionError> {
        Ok(Self {
            program_id: parse_program_id(COMPRESSED_TOKEN_PROGRAM_ID)?,
            light_system_program: parse_program_id(LIGHT_SYSTEM_PROGRAM_ID)?,
            account_compression_program: parse_program_id(ACCOUNT_COMPRESSION_PROGRAM_ID)?,
            noop_program: parse_program_id(NOOP_PROGRAM_ID)?,
        })
    }

    /// SPL token account that holds the uncompressed balance backing a mint's
    /// compressed tokens.
    pub fn token_pool_pda(&self, mint: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[POOL_SEED, mint.as_ref()], &self.program_id).0
    }

    /// Authority of every token pool, and the signer of CPIs into the light
    /// system program.
    pub fn cpi_authority_pda(&self) -> Pubkey {
        Pubkey::find_program_address(&[CPI_AUTHORITY_PDA_SEED], &self.program_id).0
    }

    /// Registration of the compressed-token program with account compression.
    pub fn registered_program_pda(&self) -> Pubkey {
        Pubkey::find_program_address(
            &[self.program_id.as_ref()],
            &self.account_compression_program,
        )
        .0
    }

    pub fn account_compression_authority(&self) -> Pubkey {
        Pubkey::find_program_address(&[CPI_AUTHORITY_PDA_SEED], &self.light_system_program).0
    }
}

fn parse_program_id(value: &str) -> Result<Pubkey, CompressionError> {
    Pubkey::from_str(value)
        .map_err(|e| CompressionError::InvalidProgramId(format!("{value}: {e}")))
}

/// Anchor instruction discriminator: first 8 bytes of `sha256("global:<name>")`.
pub fn anchor_discriminator(instruction_name: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{instruction_name}").as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}
