use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::models::TransactionBuildError;

/// Decodes the caller's base58 account.
///
/// Anything that is not exactly 32 base58-encoded bytes is rejected as
/// [`TransactionBuildError::InvalidAccount`].
pub fn validate_account(raw_account: &str) -> Result<Pubkey, TransactionBuildError> {
    Pubkey::from_str(raw_account)
        .map_err(|e| TransactionBuildError::InvalidAccount(format!("{raw_account}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_account_accepts_pubkey() {
        let pubkey = Pubkey::new_unique();

        assert_eq!(validate_account(&pubkey.to_string()).unwrap(), pubkey);
    }

    #[test]
    fn test_validate_account_rejects_empty() {
        assert!(matches!(
            validate_account(""),
            Err(TransactionBuildError::InvalidAccount(_))
        ));
    }

    #[test]
    fn test_validate_account_rejects_wrong_length() {
        // 32 leading ones decode to 32 zero bytes, 31 to 31.
        assert!(validate_account(&"1".repeat(32)).is_ok());
        assert!(matches!(
            validate_account(&"1".repeat(31)),
            Err(TransactionBuildError::InvalidAccount(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_non_base58_characters_are_rejected(
            prefix in "[1-9A-HJ-NP-Za-km-z]{0,20}",
            bad in "[0OIl+/=_ -]",
            suffix in "[1-9A-HJ-NP-Za-km-z]{0,20}",
        ) {
            let raw = format!("{prefix}{bad}{suffix}");
            prop_assert!(matches!(
                validate_account(&raw),
                Err(TransactionBuildError::InvalidAccount(_))
            ));
        }

        #[test]
        fn prop_short_base58_strings_are_rejected(raw in "[1-9A-HJ-NP-Za-km-z]{1,31}") {
            prop_assert!(validate_account(&raw).is_err());
        }
    }
}
