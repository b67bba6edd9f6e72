// base64 encode and decode helpers for serialized transactions

use base64::Engine;

pub fn base64_encode(message: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(message)
}

pub fn base64_decode(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(base64_decode("not base64!").is_err());
    }

    #[test]
    fn test_encode_matches_standard_alphabet() {
        assert_eq!(base64_encode(b"blink"), "Ymxpbms=");
        assert_eq!(base64_decode("Ymxpbms=").unwrap(), b"blink");
    }
}
