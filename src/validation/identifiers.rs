//! Transaction id and address format checks.

/// Length of a transaction id or wallet address (32 bytes in Base64URL).
pub const ID_LENGTH: usize = 43;

/// Returns true iff `id` is exactly 43 characters from `[A-Za-z0-9_-]`.
pub fn is_valid_transaction_id(id: &str) -> bool {
    id.len() == ID_LENGTH
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Wallet addresses share the transaction id format.
pub fn is_valid_address(address: &str) -> bool {
    is_valid_transaction_id(address)
}

/// Missing identifiers are invalid.
pub fn is_valid_optional_id(id: Option<&str>) -> bool {
    id.is_some_and(is_valid_transaction_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "bNbA3TEQVL60xlgCcqdz4ZPHFZ711cZ3hmkpGttDt_U";

    #[test]
    fn test_valid_id() {
        assert_eq!(VALID.len(), ID_LENGTH);
        assert!(is_valid_transaction_id(VALID));
        assert!(is_valid_address(VALID));
        assert!(is_valid_transaction_id(&"-".repeat(43)));
        assert!(is_valid_transaction_id(&"_".repeat(43)));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_transaction_id("abc"));
        assert!(!is_valid_transaction_id(&"a".repeat(44)));
        assert!(!is_valid_transaction_id(&"a".repeat(42)));
        assert!(!is_valid_transaction_id(""));
    }

    #[test]
    fn test_invalid_characters() {
        let bad = format!("{}!@#$", &VALID[..39]);
        assert_eq!(bad.len(), 43);
        assert!(!is_valid_transaction_id(&bad));
        assert!(!is_valid_transaction_id(&format!("{}+", &VALID[..42])));
        assert!(!is_valid_transaction_id(&format!("{}=", &VALID[..42])));
        assert!(!is_valid_transaction_id(&format!("{} ", &VALID[..42])));
    }

    #[test]
    fn test_multibyte_never_matches() {
        // 41 ASCII + one 2-byte char is 43 bytes but not a valid id.
        let tricky = format!("{}é", &VALID[..41]);
        assert_eq!(tricky.len(), 43);
        assert!(!is_valid_transaction_id(&tricky));
    }

    #[test]
    fn test_optional() {
        assert!(!is_valid_optional_id(None));
        assert!(is_valid_optional_id(Some(VALID)));
        assert!(!is_valid_optional_id(Some("")));
    }
}
