//! Textbook RSA operations on key material built from generated primes.
//!
//! No padding and no blinding: these are the bare number-theoretic maps,
//! meant for checking key material, not for protecting data.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::One;

use crate::{
    error::Error,
    hex::{HexString, parse_hex},
};

/// Returns the private exponent `d = e^-1 mod (p - 1)(q - 1)` for the primes `p` and `q`
/// and the public exponent `e`.
///
/// Returns [`Error::InvalidModulus`] if `p` or `q` is below 2 or the totient is 1,
/// and [`Error::NoInverse`] if `e` shares a factor with the totient.
/// The primality of `p` and `q` is not checked.
pub fn private_exponent(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<BigUint, Error> {
    let one = BigUint::one();
    if p <= &one || q <= &one {
        return Err(Error::InvalidModulus);
    }

    let totient = (p - &one) * (q - &one);
    if totient.is_one() {
        return Err(Error::InvalidModulus);
    }

    e.modinv(&totient).ok_or(Error::NoInverse)
}

/// Returns `message^e mod modulus`.
///
/// Returns [`Error::InvalidModulus`] if `modulus` is below 2.
/// Messages that are not reduced modulo `modulus` are accepted.
pub fn encrypt(message: &BigUint, e: &BigUint, modulus: &BigUint) -> Result<BigUint, Error> {
    if modulus <= &BigUint::one() {
        return Err(Error::InvalidModulus);
    }
    Ok(message.modpow(e, modulus))
}

/// For every message, encrypts it with the public key `(e, modulus)` and returns the position
/// of the first ciphertext equal to the result, or `None` if there is no such ciphertext.
///
/// Returns [`Error::InvalidModulus`] if `modulus` is below 2.
pub fn match_ciphertexts(
    messages: &[BigUint],
    ciphertexts: &[BigUint],
    e: &BigUint,
    modulus: &BigUint,
) -> Result<Vec<Option<usize>>, Error> {
    messages
        .iter()
        .map(|message| {
            let encrypted = encrypt(message, e, modulus)?;
            Ok(ciphertexts.iter().position(|ciphertext| ciphertext == &encrypted))
        })
        .collect()
}

/// Hexadecimal counterpart of [`private_exponent`].
///
/// The inputs are parsed with [`parse_hex`]; the result is in canonical form.
pub fn private_exponent_hex(p: &str, q: &str, e: &str) -> Result<HexString, Error> {
    let d = private_exponent(&parse_hex(p)?, &parse_hex(q)?, &parse_hex(e)?)?;
    Ok(HexString::from_uint(&d))
}

/// Hexadecimal counterpart of [`match_ciphertexts`].
///
/// Ciphertexts are compared by value, so their letter case and leading zeros do not matter.
pub fn match_ciphertexts_hex(
    messages: &[&str],
    ciphertexts: &[&str],
    e: &str,
    modulus: &str,
) -> Result<Vec<Option<usize>>, Error> {
    let parse_all =
        |items: &[&str]| -> Result<Vec<BigUint>, Error> { items.iter().map(|item| Ok(parse_hex(item)?)).collect() };

    match_ciphertexts(
        &parse_all(messages)?,
        &parse_all(ciphertexts)?,
        &parse_hex(e)?,
        &parse_hex(modulus)?,
    )
}
