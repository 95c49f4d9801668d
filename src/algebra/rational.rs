//! Exact rational scalars.
//!
//! Every coefficient, probability and payoff in the solver is a
//! [`Rational`], so equilibrium values such as `1/3` come out exactly.
//! Numerators and denominators are arbitrary precision, so no input can
//! overflow.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// Exact rational number used throughout the crate.
pub type Rational = BigRational;

/// Build a rational from an integer.
pub fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Build the reduced rational `numer / denom`.
///
/// Panics if `denom` is zero.
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Lossy conversion for display and simulation.
pub fn to_f64(r: &Rational) -> f64 {
    ToPrimitive::to_f64(r).unwrap_or(f64::NAN)
}

/// Parse `n`, `n/d` or a finite decimal such as `0.75`.
pub fn parse_rational(text: &str) -> Result<Rational> {
    let s = text.trim();
    if s.is_empty() {
        return Err(Error::Parse(text.to_string()));
    }
    if let Some((whole, frac)) = s.split_once('.') {
        return parse_decimal(whole, frac).ok_or_else(|| Error::Parse(text.to_string()));
    }
    s.parse::<Rational>()
        .map_err(|_| Error::Parse(text.to_string()))
}

fn parse_decimal(whole: &str, frac: &str) -> Option<Rational> {
    let (negative, whole) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{}{}", whole, frac);
    let numer: BigInt = digits.parse().ok()?;
    let denom = num_traits::pow(BigInt::from(10), frac.len());
    let value = Rational::new(numer, denom);
    Some(if negative { -value } else { value })
}

/// Serde adapter that writes rationals as `"n/d"` strings.
///
/// Integers are also accepted on input.
pub mod serde_str {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{int, parse_rational, Rational};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    /// Serialize as a string.
    pub fn serialize<S: Serializer>(value: &Rational, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize from a string or integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rational, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => parse_rational(&text).map_err(serde::de::Error::custom),
            Raw::Int(n) => Ok(int(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_fraction() {
        assert_eq!(parse_rational("2").unwrap(), int(2));
        assert_eq!(parse_rational(" 3/4 ").unwrap(), ratio(3, 4));
        assert_eq!(parse_rational("-1/2").unwrap(), ratio(-1, 2));
    }

    #[test]
    fn test_parse_decimal_is_exact() {
        assert_eq!(parse_rational("0.75").unwrap(), ratio(3, 4));
        assert_eq!(parse_rational("1.5").unwrap(), ratio(3, 2));
        assert_eq!(parse_rational("-0.1").unwrap(), ratio(-1, 10));
        assert_eq!(parse_rational(".5").unwrap(), ratio(1, 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_rational("").is_err());
        assert!(parse_rational("abc").is_err());
        assert!(parse_rational("1/0").is_err());
        assert!(parse_rational("1.2.3").is_err());
        assert!(parse_rational(".").is_err());
    }

    #[test]
    fn test_parse_long_decimal_is_exact() {
        let parsed = parse_rational("0.1234567890123456789").unwrap();
        let expected = parse_rational("1234567890123456789/10000000000000000000").unwrap();
        assert_eq!(parsed, expected);
        assert!((to_f64(&parsed) - 0.123_456_789_012_345_68).abs() < 1e-15);

        let many_digits = format!("-3.{}", "1".repeat(40));
        let parsed = parse_rational(&many_digits).unwrap();
        assert!((to_f64(&parsed) + 3.111_111_111_111_111).abs() < 1e-12);
    }

    #[test]
    fn test_huge_fraction_literal() {
        let parsed = parse_rational("1/30000000000000000000000").unwrap();
        assert!(parsed > int(0));
        assert_eq!(parsed.to_string(), "1/30000000000000000000000");
    }

    #[test]
    fn test_to_f64() {
        assert!((to_f64(&ratio(1, 3)) - 1.0 / 3.0).abs() < 1e-12);
    }
}
