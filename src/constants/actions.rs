//! Action descriptor defaults, parameter fallbacks and the CORS header set
//! expected by action-rendering clients.

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Native SOL decimals, used to scale transfer amounts.
pub const SOLANA_DECIMALS: u8 = 9;

/// Fallback transfer amount in SOL.
pub const DEFAULT_TRANSFER_AMOUNT_SOL: f64 = 0.1;

/// Fallback number of whole tokens compressed by the mint strategies.
pub const DEFAULT_TOKEN_AMOUNT: f64 = 1000.0;

/// Fallback mint decimals.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 9;

/// Largest accepted mint decimals. `10^19` no longer fits a u64.
pub const MAX_TOKEN_DECIMALS: u8 = 18;

pub const DEFAULT_TOKEN_NAME: &str = "Compressed Token";

pub const DEFAULT_TOKEN_SYMBOL: &str = "CTKN";

pub const DEFAULT_ACTION_ICON: &str = "https://cdn.prod.website-files.com/636e894daa9e99940a604aef/66a0c396c60f181c53734c94_Add%20Solana%20to%20MetaMask%20(5).webp";

/// Default recipient of the simple transfer action.
pub const DEFAULT_TRANSFER_RECIPIENT: &str = "FVzSbqAsLPy6Pyv4jtW9LzL96BouWorfzBNkBEZBp3jK";

/// Default RPC endpoint.
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

pub const DEFAULT_SOLANA_RPC_TIMEOUT_SECONDS: u64 = 30;

/// Solana Actions protocol version advertised to clients.
pub const ACTION_VERSION: &str = "2.1.3";

/// CAIP-2 id of Solana mainnet-beta.
pub const SOLANA_MAINNET_BLOCKCHAIN_ID: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";

pub const HEADER_ACTION_VERSION: &str = "X-Action-Version";
pub const HEADER_BLOCKCHAIN_IDS: &str = "X-Blockchain-Ids";

pub const ACTIONS_ALLOWED_ORIGIN: &str = "*";
pub const ACTIONS_ALLOWED_METHODS: &str = "GET,POST,PUT,OPTIONS";
pub const ACTIONS_ALLOWED_HEADERS: &str =
    "Content-Type, Authorization, Content-Encoding, Accept-Encoding";
pub const ACTIONS_EXPOSED_HEADERS: &str = "X-Action-Version, X-Blockchain-Ids";

/// Methods granted to a whitelisted origin on preflight.
pub const WHITELIST_ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
/// Headers granted to a whitelisted origin on preflight.
pub const WHITELIST_ALLOWED_HEADERS: &str = "Content-Type, Authorization, Content-Encoding, Accept-Encoding, X-Requested-With, X-Action-Version, X-Blockchain-Ids";

/// Path prefix under which every action is served.
pub const ACTIONS_PATH_PREFIX: &str = "/api/actions";
