use solana_sdk::{
    hash::Hash, instruction::Instruction, pubkey::Pubkey, signature::Keypair,
    transaction::Transaction,
};

use crate::models::{EncodedSerializedTransaction, TransactionBuildError};

/// Assembles the transaction with `fee_payer` and `blockhash`, and signs it
/// with every keypair generated during the build. The fee payer's signature is
/// left for the caller's wallet.
pub fn finalize(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    blockhash: Hash,
    ephemeral_signers: &[&Keypair],
) -> Result<Transaction, TransactionBuildError> {
    let mut transaction = Transaction::new_with_payer(instructions, Some(fee_payer));
    transaction.message.recent_blockhash = blockhash;

    if !ephemeral_signers.is_empty() {
        transaction
            .try_partial_sign(ephemeral_signers, blockhash)
            .map_err(|e| TransactionBuildError::Signing(e.to_string()))?;
    }

    Ok(transaction)
}

/// Wire encoding of a finalized transaction.
pub fn encode(
    transaction: &Transaction,
) -> Result<EncodedSerializedTransaction, TransactionBuildError> {
    EncodedSerializedTransaction::try_from(transaction)
        .map_err(|e| TransactionBuildError::Serialization(e.to_string()))
}
