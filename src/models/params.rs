//! Build strategies, raw query parameters, and amount scaling policy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The transaction a build request produces. Parsed from the `{action}` path
/// segment of the action endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum BuildStrategy {
    /// Single native transfer to the configured recipient.
    #[strum(serialize = "transfer")]
    SimpleTransfer,
    /// New SPL Token mint, minted to the caller and compressed.
    #[strum(serialize = "compress")]
    MintAndCompressBasic,
    /// New Token-2022 mint carrying on-chain metadata, minted and compressed.
    #[strum(serialize = "compress-metadata")]
    MintAndCompressWithMetadata,
}

impl BuildStrategy {
    pub fn creates_mint(&self) -> bool {
        !matches!(self, BuildStrategy::SimpleTransfer)
    }

    pub fn has_metadata(&self) -> bool {
        matches!(self, BuildStrategy::MintAndCompressWithMetadata)
    }

    /// Query parameters read by the build handler for this strategy.
    pub fn query_parameters(&self) -> &'static [&'static str] {
        match self {
            BuildStrategy::SimpleTransfer => &["amount"],
            BuildStrategy::MintAndCompressBasic => &["amount", "decimals", "supply"],
            BuildStrategy::MintAndCompressWithMetadata => {
                &["amount", "decimals", "supply", "name", "symbol"]
            }
        }
    }
}

/// Raw query string of a build request.
///
/// Every field is kept as text so that absent or malformed values can be
/// replaced by their documented defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildQuery {
    pub amount: Option<String>,
    pub decimals: Option<String>,
    pub supply: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// How a whole-token quantity is converted before it is written into an
/// instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Scale {
    /// `value × 10^decimals`.
    #[default]
    BaseUnits,
    /// `value` as given, with any fraction truncated.
    WholeUnits,
}

/// Per-step scaling of token quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmountScaling {
    pub mint_to: Scale,
    pub compress: Scale,
}

impl AmountScaling {
    pub fn is_symmetric(&self) -> bool {
        self.mint_to == self.compress
    }
}
