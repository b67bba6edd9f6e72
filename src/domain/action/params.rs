//! Resolution of raw query parameters into the values a build uses.
//!
//! Numeric parameters follow a permissive default policy: a value that is
//! absent, empty, not a number, not finite, zero or negative is replaced by its
//! default. Values that are numeric but cannot be represented (too many
//! decimals, base units overflowing a u64, amounts too small to survive
//! scaling, compressing more than is minted) are rejected as
//! [`TransactionBuildError::InvalidParameters`].

use crate::{
    constants::{
        DEFAULT_TOKEN_AMOUNT, DEFAULT_TOKEN_DECIMALS, DEFAULT_TOKEN_NAME, DEFAULT_TOKEN_SYMBOL,
        DEFAULT_TRANSFER_AMOUNT_SOL, MAX_TOKEN_DECIMALS, SOLANA_DECIMALS,
    },
    models::{AmountScaling, BuildQuery, BuildStrategy, Scale, TransactionBuildError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TransferParams {
    pub amount_sol: f64,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadataParams {
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MintParams {
    pub decimals: u8,
    /// Whole tokens moved into compressed state.
    pub amount: f64,
    /// Whole tokens minted to the caller.
    pub supply: f64,
    /// Value written into the mint-to instruction.
    pub mint_amount: u64,
    /// Value written into the compress instruction.
    pub compress_amount: u64,
    pub metadata: Option<TokenMetadataParams>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildParams {
    Transfer(TransferParams),
    Mint(MintParams),
}

impl BuildParams {
    pub fn resolve(
        strategy: BuildStrategy,
        query: &BuildQuery,
        scaling: &AmountScaling,
    ) -> Result<Self, TransactionBuildError> {
        if !strategy.creates_mint() {
            let amount_sol = positive_number(query.amount.as_deref(), DEFAULT_TRANSFER_AMOUNT_SOL);
            let lamports = non_zero_scale(amount_sol, SOLANA_DECIMALS, Scale::BaseUnits, "amount")?;
            return Ok(BuildParams::Transfer(TransferParams {
                amount_sol,
                lamports,
            }));
        }

        let decimals = decimals(query.decimals.as_deref())?;
        let amount = positive_number(query.amount.as_deref(), DEFAULT_TOKEN_AMOUNT);
        let supply = positive_number(query.supply.as_deref(), amount);

        let mint_amount = non_zero_scale(supply, decimals, scaling.mint_to, "supply")?;
        let compress_amount = non_zero_scale(amount, decimals, scaling.compress, "amount")?;
        // Compared after scaling: the steps may scale differently.
        if compress_amount > mint_amount {
            return Err(TransactionBuildError::InvalidParameters(format!(
                "amount {amount} ({compress_amount} {}) exceeds supply {supply} ({mint_amount} {})",
                scaling.compress, scaling.mint_to
            )));
        }

        let metadata = strategy.has_metadata().then(|| TokenMetadataParams {
            name: text(query.name.as_deref(), DEFAULT_TOKEN_NAME),
            symbol: text(query.symbol.as_deref(), DEFAULT_TOKEN_SYMBOL),
        });

        Ok(BuildParams::Mint(MintParams {
            decimals,
            amount,
            supply,
            mint_amount,
            compress_amount,
            metadata,
        }))
    }
}

fn positive_number(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(default)
}

/// Like [`scale`], but a positive input that scales to nothing is an error.
fn non_zero_scale(
    value: f64,
    decimals: u8,
    scale_by: Scale,
    field: &str,
) -> Result<u64, TransactionBuildError> {
    let scaled = scale(value, decimals, scale_by, field)?;
    if scaled == 0 {
        return Err(TransactionBuildError::InvalidParameters(format!(
            "{field} {value} rounds to zero"
        )));
    }
    Ok(scaled)
}

fn decimals(raw: Option<&str>) -> Result<u8, TransactionBuildError> {
    let Some(value) = raw.and_then(|value| value.trim().parse::<u64>().ok()) else {
        return Ok(DEFAULT_TOKEN_DECIMALS);
    };
    match value {
        0 => Ok(DEFAULT_TOKEN_DECIMALS),
        v if v > MAX_TOKEN_DECIMALS as u64 => Err(TransactionBuildError::InvalidParameters(
            format!("decimals must be at most {MAX_TOKEN_DECIMALS}, got {v}"),
        )),
        v => Ok(v as u8),
    }
}

fn text(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Converts a whole-unit quantity into the integer written on-chain.
pub fn scale(
    value: f64,
    decimals: u8,
    scale: Scale,
    field: &str,
) -> Result<u64, TransactionBuildError> {
    let scaled = match scale {
        Scale::BaseUnits => (value * 10f64.powi(decimals as i32)).round(),
        Scale::WholeUnits => value.trunc(),
    };
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if !scaled.is_finite() || scaled < 0.0 || scaled >= u64::MAX as f64 {
        return Err(TransactionBuildError::InvalidParameters(format!(
            "{field} {value} with {decimals} decimals does not fit in a u64"
        )));
    }
    Ok(scaled as u64)
}
