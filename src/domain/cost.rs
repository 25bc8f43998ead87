use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_max_decimal_places;
use std::str::FromStr;

const FIELD: &str = "cost";
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount with two decimal places, stored as whole cents.
///
/// Values with more precision cannot be represented: [`Cost::parse`] rejects
/// `"1.123"` but accepts `"1.120"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost {
    cents: i64,
}

impl Cost {
    pub const ZERO: Cost = Cost { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn from_whole(units: i64) -> Self {
        Self {
            cents: units.saturating_mul(CENTS_PER_UNIT),
        }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Parses a plain decimal literal such as `"250"`, `"99.5"` or `"-1.25"`.
    pub fn parse(text: &str) -> Result<Self> {
        let not_a_number =
            || CatalogError::invalid_range(FIELD, format!("'{}' is not a decimal number", text));
        let too_large = || CatalogError::invalid_range(FIELD, format!("'{}' is too large", text));

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() && fraction.is_empty() {
            return Err(not_a_number());
        }
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(not_a_number());
        }
        validate_max_decimal_places(FIELD, unsigned, 2)?;

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let fraction = fraction.trim_end_matches('0');
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| not_a_number())? * 10,
            _ => fraction.parse().map_err(|_| not_a_number())?,
        };

        let cents = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(too_large)?;
        Ok(Self {
            cents: if negative { -cents } else { cents },
        })
    }
}

impl FromStr for Cost {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / CENTS_PER_UNIT as u64,
            abs % CENTS_PER_UNIT as u64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_parse_accepts_up_to_two_places() {
        assert_eq!(Cost::parse("1").unwrap(), Cost::from_cents(100));
        assert_eq!(Cost::parse("1.0").unwrap(), Cost::from_cents(100));
        assert_eq!(Cost::parse("1.1").unwrap(), Cost::from_cents(110));
        assert_eq!(Cost::parse("1.12").unwrap(), Cost::from_cents(112));
        assert_eq!(Cost::parse("1.120").unwrap(), Cost::from_cents(112));
        assert_eq!(Cost::parse(".5").unwrap(), Cost::from_cents(50));
        assert_eq!(Cost::parse("-1.25").unwrap(), Cost::from_cents(-125));
        assert_eq!(Cost::parse("42.07").unwrap().cents(), 4207);
    }

    #[test]
    fn test_parse_rejects_precision_and_garbage() {
        let err = Cost::parse("1.123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);

        for bad in ["", ".", "abc", "1.2.3", "1e5", " 1"] {
            assert!(Cost::parse(bad).is_err(), "{:?} should not parse", bad);
        }
        assert!(Cost::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from_whole(100).to_string(), "100.00");
        assert_eq!(Cost::from_cents(105).to_string(), "1.05");
        assert_eq!(Cost::from_cents(-5).to_string(), "-0.05");
        assert_eq!("42.5".parse::<Cost>().unwrap().to_string(), "42.50");
    }
}
