use thiserror::Error;

use crate::{
    domain::{CompressionError, TokenError},
    services::SolanaProviderError,
};

/// Failures of the transaction build pipeline.
#[derive(Error, Debug)]
pub enum TransactionBuildError {
    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Network error: {0}")]
    Network(#[from] SolanaProviderError),

    #[error("Failed to construct {step} instruction: {reason}")]
    InstructionConstruction { step: String, reason: String },

    #[error("Failed to sign transaction: {0}")]
    Signing(String),

    #[error("Failed to serialize transaction: {0}")]
    Serialization(String),
}

impl From<TokenError> for TransactionBuildError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InstructionError { step, reason } => {
                TransactionBuildError::InstructionConstruction {
                    step: step.to_string(),
                    reason,
                }
            }
            TokenError::InvalidLayout(reason) => TransactionBuildError::InstructionConstruction {
                step: "mint layout".to_string(),
                reason,
            },
        }
    }
}

impl From<CompressionError> for TransactionBuildError {
    fn from(error: CompressionError) -> Self {
        match error {
            CompressionError::Serialization { step, reason } => {
                TransactionBuildError::InstructionConstruction {
                    step: step.to_string(),
                    reason,
                }
            }
            CompressionError::InvalidProgramId(reason) => {
                TransactionBuildError::InstructionConstruction {
                    step: "compression program".to_string(),
                    reason,
                }
            }
        }
    }
}
