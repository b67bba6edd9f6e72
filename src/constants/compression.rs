//! Light Protocol program ids, seeds and default accounts used when building
//! compression instructions.

/// Light compressed-token program.
pub const COMPRESSED_TOKEN_PROGRAM_ID: &str = "cTokenmWW8bLPjZEBAUgYy3zKxQZW6VKi7bqNFEVv3m";

/// Light system program.
pub const LIGHT_SYSTEM_PROGRAM_ID: &str = "SySTEM1eSU2p4BGQfQpimFEWWSC1XDFeun3Nqzz3rT7";

/// Light account-compression program.
pub const ACCOUNT_COMPRESSION_PROGRAM_ID: &str = "compr6CUsB5m2jS4Y3831ztGSTnDpnKJTKS95d64XVq";

/// SPL noop program used by the account-compression program for event logging.
pub const NOOP_PROGRAM_ID: &str = "noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV";

/// Default public state Merkle tree that receives compressed token accounts.
pub const DEFAULT_STATE_TREE: &str = "smt1NamzXdq4AMqS2fS2F1i5KTYPZRhoHgWx38d8WsT";

pub const POOL_SEED: &[u8] = b"pool";
pub const CPI_AUTHORITY_PDA_SEED: &[u8] = b"cpi_authority";

/// Anchor instruction names on the compressed-token program.
pub const CREATE_TOKEN_POOL_INSTRUCTION: &str = "create_token_pool";
pub const TRANSFER_INSTRUCTION: &str = "transfer";
