//! Textual representation of candidates and generated primes.
//!
//! Primes are exchanged as uppercase hexadecimal strings without a prefix or leading zeros.
//! Parsing is more lenient: lowercase digits, a `0x` prefix, leading zeros
//! and surrounding whitespace are accepted. Digits written least significant first
//! are read by [`parse_hex_reversed`].

use alloc::{format, string::String, vec::Vec};
use core::{fmt, str::FromStr};

use num_bigint::BigUint;
use rand_core::CryptoRng;

#[cfg(feature = "default-rng")]
use rand_core::{OsRng, TryRngCore};

use crate::{
    error::{Error, ParseError},
    presets::{is_prime, random_prime},
};

/// A non-negative integer in canonical hexadecimal form:
/// uppercase digits, no prefix, no leading zeros (zero itself is `"0"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexString(String);

impl HexString {
    /// Formats `num` in canonical form.
    pub fn from_uint(num: &BigUint) -> Self {
        Self(to_hex(num))
    }

    /// Returns the integer this string represents.
    pub fn to_uint(&self) -> BigUint {
        BigUint::parse_bytes(self.0.as_bytes(), 16).expect("the string is a canonical hexadecimal number")
    }

    /// Returns the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for HexString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uint(&parse_hex(s)?))
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&BigUint> for HexString {
    fn from(num: &BigUint) -> Self {
        Self::from_uint(num)
    }
}

/// Validates `input` and returns its digit values in the order they are written.
fn digit_values(input: &str, radix: u32, prefixes: &[&str]) -> Result<Vec<u8>, ParseError> {
    let leading_whitespace = input.len() - input.trim_start().len();
    let trimmed = input.trim();

    let (prefix_len, digits) = prefixes
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix).map(|rest| (prefix.len(), rest)))
        .unwrap_or((0, trimmed));

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    let offset = leading_whitespace + prefix_len;
    digits
        .char_indices()
        .map(|(position, found)| {
            found
                .to_digit(radix)
                // A digit of a radix of at most 16 fits in a byte.
                .map(|value| value as u8)
                .ok_or(ParseError::InvalidDigit {
                    position: offset + position,
                    found,
                })
        })
        .collect()
}

/// Parses a hexadecimal integer.
///
/// Accepts upper- and lowercase digits, an optional `0x` or `0X` prefix,
/// leading zeros, and surrounding whitespace.
/// A sign, interior whitespace or digit separators are rejected.
pub fn parse_hex(input: &str) -> Result<BigUint, ParseError> {
    let values = digit_values(input, 16, &["0x", "0X"])?;
    Ok(BigUint::from_radix_be(&values, 16).expect("all digits are below the radix"))
}

/// Parses a hexadecimal integer written least significant digit first.
///
/// `"01"` is sixteen. Digits are accepted as in [`parse_hex`], but there is no prefix;
/// trailing zeros are the insignificant ones.
pub fn parse_hex_reversed(input: &str) -> Result<BigUint, ParseError> {
    let values = digit_values(input, 16, &[])?;
    Ok(BigUint::from_radix_le(&values, 16).expect("all digits are below the radix"))
}

/// Parses a decimal integer.
///
/// Accepts leading zeros and surrounding whitespace.
pub fn parse_decimal(input: &str) -> Result<BigUint, ParseError> {
    let values = digit_values(input, 10, &[])?;
    Ok(BigUint::from_radix_be(&values, 10).expect("all digits are below the radix"))
}

/// Formats `num` as uppercase hexadecimal, without a prefix or leading zeros.
pub fn to_hex(num: &BigUint) -> String {
    format!("{num:X}")
}

/// Formats `num` as uppercase hexadecimal, least significant digit first.
///
/// The inverse of [`parse_hex_reversed`]. Zero is `"0"`.
pub fn to_hex_reversed(num: &BigUint) -> String {
    to_hex(num).chars().rev().collect()
}

/// Checks if the hexadecimal integer in `input` is prime.
///
/// See [`is_prime`](crate::is_prime) for details about the performed checks.
pub fn is_prime_hex(input: &str) -> Result<bool, Error> {
    let num = parse_hex(input)?;
    Ok(is_prime(&num))
}

/// Checks if the hexadecimal integer in `input`, written least significant digit first, is prime.
///
/// See [`parse_hex_reversed`] for the accepted format.
pub fn is_prime_hex_reversed(input: &str) -> Result<bool, Error> {
    let num = parse_hex_reversed(input)?;
    Ok(is_prime(&num))
}

/// Checks if the decimal integer in `input` is prime.
pub fn is_prime_decimal(input: &str) -> Result<bool, Error> {
    let num = parse_decimal(input)?;
    Ok(is_prime(&num))
}

/// Returns a random prime of size `bit_length` in canonical hexadecimal form, using the provided RNG.
///
/// The result has exactly `ceil(bit_length / 4)` digits.
/// See [`random_prime`](crate::random_prime) for details and errors.
pub fn generate_prime_hex_with_rng<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: u32) -> Result<HexString, Error> {
    random_prime(rng, bit_length).map(|prime| HexString::from_uint(&prime))
}

/// Returns a random prime of size `bit_length` in canonical hexadecimal form, using [`OsRng`] as the RNG.
///
/// See [`generate_prime_hex_with_rng`] for details.
#[cfg(feature = "default-rng")]
pub fn generate_prime_hex(bit_length: u32) -> Result<HexString, Error> {
    generate_prime_hex_with_rng(&mut OsRng.unwrap_err(), bit_length)
}
