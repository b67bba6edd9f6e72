use serde::{Deserialize, Serialize};
use solana_sdk::transaction::Transaction;

use crate::utils::{base64_decode, base64_encode};

/// A bincode serialized, base64 encoded legacy transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EncodedSerializedTransaction(String);

impl EncodedSerializedTransaction {
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EncodedSerializedTransaction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&Transaction> for EncodedSerializedTransaction {
    type Error = bincode::Error;

    fn try_from(transaction: &Transaction) -> Result<Self, Self::Error> {
        let bytes = bincode::serialize(transaction)?;
        Ok(Self(base64_encode(&bytes)))
    }
}

impl TryFrom<&EncodedSerializedTransaction> for Transaction {
    type Error = String;

    fn try_from(encoded: &EncodedSerializedTransaction) -> Result<Self, Self::Error> {
        let bytes = base64_decode(&encoded.0).map_err(|e| format!("Invalid base64: {e}"))?;
        bincode::deserialize(&bytes).map_err(|e| format!("Invalid transaction bytes: {e}"))
    }
}
