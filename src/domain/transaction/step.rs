use serde::Serialize;
use solana_sdk::instruction::Instruction;
use strum::Display;

use crate::models::TransactionBuildError;

/// What an emitted instruction does. Used to label instructions and to check
/// that they were emitted in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InstructionStep {
    Transfer,
    CreateAccount,
    InitializeMetadataPointer,
    InitializeMint,
    InitializeMetadata,
    CreateTokenPool,
    CreateAssociatedTokenAccount,
    MintTo,
    Compress,
}

impl InstructionStep {
    /// Position in the dependency order. A step may only follow steps of a
    /// strictly lower rank.
    pub fn rank(&self) -> u8 {
        match self {
            InstructionStep::Transfer | InstructionStep::CreateAccount => 0,
            InstructionStep::InitializeMetadataPointer => 1,
            InstructionStep::InitializeMint => 2,
            InstructionStep::InitializeMetadata => 3,
            InstructionStep::CreateTokenPool => 4,
            InstructionStep::CreateAssociatedTokenAccount => 5,
            InstructionStep::MintTo => 6,
            InstructionStep::Compress => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequencedInstruction {
    pub step: InstructionStep,
    pub instruction: Instruction,
}

/// Ordered instructions of a single transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionSet {
    instructions: Vec<SequencedInstruction>,
}

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: InstructionStep, instruction: Instruction) {
        self.instructions
            .push(SequencedInstruction { step, instruction });
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn steps(&self) -> Vec<InstructionStep> {
        self.instructions.iter().map(|ix| ix.step).collect()
    }

    pub fn get(&self, step: InstructionStep) -> Option<&Instruction> {
        self.instructions
            .iter()
            .find(|ix| ix.step == step)
            .map(|ix| &ix.instruction)
    }

    pub fn instructions(&self) -> Vec<Instruction> {
        self.instructions
            .iter()
            .map(|ix| ix.instruction.clone())
            .collect()
    }

    /// Fails unless the set is non-empty and every step ranks strictly above
    /// the one before it.
    pub fn validate_order(&self) -> Result<(), TransactionBuildError> {
        if self.is_empty() {
            return Err(TransactionBuildError::InstructionConstruction {
                step: "transaction".to_string(),
                reason: "no instructions sequenced".to_string(),
            });
        }
        for pair in self.instructions.windows(2) {
            let (previous, current) = (pair[0].step, pair[1].step);
            if current.rank() <= previous.rank() {
                return Err(TransactionBuildError::InstructionConstruction {
                    step: current.to_string(),
                    reason: format!("emitted after {previous}"),
                });
            }
        }
        Ok(())
    }
}
