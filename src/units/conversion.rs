//! Exact decimal conversion between Winston and AR.

use num_bigint::BigUint;

use crate::units::{ConversionError, ConversionResult};

/// Number of fractional digits in an AR amount.
pub const AR_DECIMALS: usize = 12;

/// Winston in one AR (10^12).
pub const WINSTON_PER_AR: u64 = 1_000_000_000_000;

/// Parse a Winston amount (plain decimal digits) into a big integer.
pub fn parse_winston(winston: &str) -> ConversionResult<BigUint> {
    let digits = winston.trim();
    check_sign(digits)?;
    if digits.is_empty() {
        return Err(ConversionError::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::NotNumeric(winston.to_string()));
    }
    parse_digits(digits, winston)
}

/// Convert Winston to AR with exactly twelve fractional digits.
///
/// `"1000000000000"` becomes `"1.000000000000"`.
pub fn winston_to_ar(winston: &str) -> ConversionResult<String> {
    let amount = parse_winston(winston)?;
    let scale = BigUint::from(WINSTON_PER_AR);

    let whole = &amount / &scale;
    let fraction = &amount % &scale;

    Ok(format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = AR_DECIMALS
    ))
}

/// Convert an AR decimal string to Winston, i.e. `floor(ar * 10^12)`.
///
/// Digits beyond the twelfth fractional place are dropped.
pub fn ar_to_winston(ar: &str) -> ConversionResult<String> {
    let amount = ar.trim();
    check_sign(amount)?;
    if amount.is_empty() {
        return Err(ConversionError::Empty);
    }

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(ConversionError::NotNumeric(ar.to_string()));
    }
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(ConversionError::NotNumeric(ar.to_string()));
    }

    let kept = &fraction[..fraction.len().min(AR_DECIMALS)];
    let scaled = format!("{}{:0<width$}", whole, kept, width = AR_DECIMALS);

    Ok(parse_digits(&scaled, ar)?.to_string())
}

fn check_sign(amount: &str) -> ConversionResult<()> {
    if amount.starts_with('-') {
        return Err(ConversionError::Negative(amount.to_string()));
    }
    Ok(())
}

fn parse_digits(digits: &str, original: &str) -> ConversionResult<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ConversionError::NotNumeric(original.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winston_to_ar_exact() {
        assert_eq!(winston_to_ar("1000000000000").unwrap(), "1.000000000000");
        assert_eq!(winston_to_ar("500000000000").unwrap(), "0.500000000000");
        assert_eq!(winston_to_ar("1").unwrap(), "0.000000000001");
        assert_eq!(winston_to_ar("0").unwrap(), "0.000000000000");
    }

    #[test]
    fn test_ar_to_winston_exact() {
        assert_eq!(ar_to_winston("1").unwrap(), "1000000000000");
        assert_eq!(ar_to_winston("0.5").unwrap(), "500000000000");
        assert_eq!(ar_to_winston("0.000000000001").unwrap(), "1");
        assert_eq!(ar_to_winston("0").unwrap(), "0");
    }

    #[test]
    fn test_beyond_float_precision() {
        // Well past 2^53 and past u64.
        let winston = "66000000123456789012345678";
        let ar = winston_to_ar(winston).unwrap();
        assert_eq!(ar, "66000000123456.789012345678");
        assert_eq!(ar_to_winston(&ar).unwrap(), winston);
    }

    #[test]
    fn test_round_trip_normalizes() {
        for w in ["0", "1", "999999999999", "1000000000001", "9007199254740993"] {
            assert_eq!(ar_to_winston(&winston_to_ar(w).unwrap()).unwrap(), w);
        }
        assert_eq!(ar_to_winston(&winston_to_ar("000042").unwrap()).unwrap(), "42");
    }

    #[test]
    fn test_ar_truncates_below_one_winston() {
        assert_eq!(ar_to_winston("1.0000000000019").unwrap(), "1000000000001");
        assert_eq!(ar_to_winston("0.0000000000009").unwrap(), "0");
    }

    #[test]
    fn test_ar_partial_forms() {
        assert_eq!(ar_to_winston(".5").unwrap(), "500000000000");
        assert_eq!(ar_to_winston("2.").unwrap(), "2000000000000");
        assert_eq!(ar_to_winston(" 1.25 ").unwrap(), "1250000000000");
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(winston_to_ar(""), Err(ConversionError::Empty));
        assert_eq!(ar_to_winston("  "), Err(ConversionError::Empty));
        assert!(matches!(winston_to_ar("-1"), Err(ConversionError::Negative(_))));
        assert!(matches!(ar_to_winston("-0.5"), Err(ConversionError::Negative(_))));
        assert!(matches!(winston_to_ar("+1"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(winston_to_ar("1.5"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(winston_to_ar("1_000"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(ar_to_winston("abc"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(ar_to_winston("1e-12"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(ar_to_winston("1.2.3"), Err(ConversionError::NotNumeric(_))));
        assert!(matches!(ar_to_winston("."), Err(ConversionError::NotNumeric(_))));
    }
}
