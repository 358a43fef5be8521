//! Provides a safe, self-contained type for Brazilian Real amounts.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Sub;

use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Number of centavos in one real.
const CENTAVOS_POR_REAL: i64 = 100;

/// An error that can occur when parsing a string into a `Reais` value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseReaisError {
    /// The string is not in a valid numeric format (e.g., "abc", "1,2,3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string has more than two decimal places (e.g., "1,234").
    #[error("too many decimal places")]
    TooManyDecimals,
}

/// A monetary value in Brazilian Reais (BRL).
///
/// Internally the amount is stored as a signed 64-bit integer count of
/// centavos to prevent floating-point inaccuracies. The backend serializes
/// amounts as JSON numbers, so the serde implementations convert between
/// the float wire form and the integer representation.
///
/// The `Display` implementation produces the Brazilian numeric form with
/// `.` as the thousands separator and `,` as the decimal separator.
///
/// # Examples
/// ```
/// use api::money::Reais;
///
/// let valor = Reais::new_from_float(1234.5);
/// assert_eq!(valor.centavos(), 123_450);
/// assert_eq!(valor.to_string(), "1.234,50");
/// assert_eq!(valor.to_string_with_symbol(), "R$ 1.234,50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Reais {
    centavos: i64,
}

impl Reais {
    // --- Getters ---

    /// Returns the raw amount in centavos.
    pub fn centavos(&self) -> i64 {
        self.centavos
    }

    /// Returns the amount as a floating-point number of reais, the form
    /// the backend uses on the wire.
    pub fn as_float(&self) -> f64 {
        self.centavos as f64 / CENTAVOS_POR_REAL as f64
    }

    // --- Constructors ---

    /// Creates a new `Reais` from a floating-point value, typically from an API.
    ///
    /// The float is safely converted to an integer representation by rounding
    /// to the nearest centavo.
    pub fn new_from_float(value: f64) -> Self {
        let centavos = (value * CENTAVOS_POR_REAL as f64).round() as i64;
        Self { centavos }
    }

    /// Creates a new `Reais` directly from a count of centavos.
    pub fn new_from_centavos(centavos: i64) -> Self {
        Self { centavos }
    }

    /// Parses a Brazilian-format numeric string into a `Reais` value.
    ///
    /// Accepts an optional leading `-`, optional `.` thousands separators and
    /// an optional `,` decimal part of at most two digits.
    ///
    /// # Examples
    /// ```
    /// use api::money::Reais;
    ///
    /// let valor = Reais::new_from_str("1.234,5").unwrap();
    /// assert_eq!(valor.centavos(), 123_450);
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self, ParseReaisError> {
        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let mut parts = s.split(',');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseReaisError::InvalidFormat);
        }

        if minor_str.len() > 2 {
            return Err(ParseReaisError::TooManyDecimals);
        }

        let major_digits: String = major_str.chars().filter(|c| *c != '.').collect();
        let major_units = if major_digits.is_empty() {
            0
        } else {
            major_digits
                .parse::<i64>()
                .map_err(|_| ParseReaisError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<i64>()
                .map_err(|_| ParseReaisError::InvalidFormat)?
        };

        let scaling_factor = 10_i64.pow(2 - minor_str.len() as u32);
        let scaled_minor_units = minor_units
            .checked_mul(scaling_factor)
            .ok_or(ParseReaisError::InvalidFormat)?;

        let mut centavos = major_units
            .checked_mul(CENTAVOS_POR_REAL)
            .ok_or(ParseReaisError::InvalidFormat)?
            .checked_add(scaled_minor_units)
            .ok_or(ParseReaisError::InvalidFormat)?;

        if is_negative {
            centavos = -centavos;
        }

        Ok(Self::new_from_centavos(centavos))
    }

    // --- Display Methods ---

    /// Formats the amount with the currency symbol (e.g., "R$ 25,34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("R$ {}", self)
    }
}

/// Formats the amount as a Brazilian numeric string (e.g., "1.234,50").
impl fmt::Display for Reais {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.centavos.unsigned_abs();
        let reais = abs / CENTAVOS_POR_REAL as u64;
        let centavos = abs % CENTAVOS_POR_REAL as u64;

        let digits = reais.to_string();
        let mut inteiro = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                inteiro.push('.');
            }
            inteiro.push(ch);
        }

        let sinal = if self.centavos < 0 { "-" } else { "" };
        write!(f, "{sinal}{inteiro},{centavos:02}")
    }
}

impl Add for Reais {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            centavos: self.centavos + rhs.centavos,
        }
    }
}

impl AddAssign for Reais {
    fn add_assign(&mut self, rhs: Self) {
        self.centavos += rhs.centavos;
    }
}

/// Implements checked addition. Returns `None` if the addition overflows.
impl CheckedAdd for Reais {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.centavos
            .checked_add(v.centavos)
            .map(|centavos| Self { centavos })
    }
}

impl Sub for Reais {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            centavos: self.centavos - rhs.centavos,
        }
    }
}

/// Serializes as a plain JSON number of reais, matching the backend wire form.
impl Serialize for Reais {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_float())
    }
}

/// Deserializes from a JSON number of reais, rounding to the nearest centavo.
impl<'de> Deserialize<'de> for Reais {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::new_from_float(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Reais::new_from_centavos(123_450).to_string(), "1.234,50");
        assert_eq!(
            Reais::new_from_centavos(100_000_000).to_string(),
            "1.000.000,00"
        );
        assert_eq!(Reais::new_from_centavos(99_999).to_string(), "999,99");
    }

    #[test]
    fn test_display_small_and_zero() {
        assert_eq!(Reais::new_from_centavos(0).to_string(), "0,00");
        assert_eq!(Reais::new_from_centavos(5).to_string(), "0,05");
        assert_eq!(Reais::new_from_centavos(50).to_string(), "0,50");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Reais::new_from_centavos(-123_450).to_string(), "-1.234,50");
        assert_eq!(Reais::new_from_centavos(-5).to_string(), "-0,05");
    }

    #[test]
    fn test_with_symbol_matches_locale() {
        assert_eq!(
            Reais::new_from_float(1234.5).to_string_with_symbol(),
            "R$ 1.234,50"
        );
    }

    #[test]
    fn test_from_float_rounds_to_nearest_centavo() {
        assert_eq!(Reais::new_from_float(123.456).centavos(), 12_346);
        assert_eq!(Reais::new_from_float(123.454).centavos(), 12_345);
        assert_eq!(Reais::new_from_float(-0.005).centavos(), -1);
    }

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(Reais::new_from_str("1234,5").unwrap().centavos(), 123_450);
        assert_eq!(Reais::new_from_str("1.234,50").unwrap().centavos(), 123_450);
        assert_eq!(Reais::new_from_str("70").unwrap().centavos(), 7_000);
        assert_eq!(Reais::new_from_str(",07").unwrap().centavos(), 7);
        assert_eq!(Reais::new_from_str("-10,25").unwrap().centavos(), -1_025);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Reais::new_from_str("abc").unwrap_err(),
            ParseReaisError::InvalidFormat
        );
        assert_eq!(
            Reais::new_from_str("1,2,3").unwrap_err(),
            ParseReaisError::InvalidFormat
        );
        assert_eq!(
            Reais::new_from_str("").unwrap_err(),
            ParseReaisError::InvalidFormat
        );
        assert_eq!(
            Reais::new_from_str("1,234").unwrap_err(),
            ParseReaisError::TooManyDecimals
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Reais::new_from_centavos(i64::MAX);
        let one = Reais::new_from_centavos(1);
        assert_eq!(max.checked_add(&one), None);
        assert_eq!(
            one.checked_add(&one),
            Some(Reais::new_from_centavos(2))
        );
    }

    #[test]
    fn test_sub_can_go_negative() {
        assert_eq!(
            Reais::new_from_centavos(150) - Reais::new_from_centavos(200),
            Reais::new_from_centavos(-50)
        );
    }

    #[test]
    fn test_serde_wire_is_float() {
        let valor = Reais::new_from_float(1234.5);
        assert_eq!(serde_json::to_string(&valor).unwrap(), "1234.5");

        let parsed: Reais = serde_json::from_str("1234.5").unwrap();
        assert_eq!(parsed, valor);

        // integers on the wire also deserialize
        let inteiro: Reais = serde_json::from_str("70").unwrap();
        assert_eq!(inteiro.centavos(), 7_000);
    }
}
