#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications,
    clippy::unwrap_used
)]

extern crate alloc;

mod error;
pub mod fips;
pub mod hazmat;
pub mod hex;
mod presets;
pub mod rsa;
mod traits;

#[cfg(feature = "multicore")]
pub mod multicore;

pub use error::{Error, ParseError};
pub use hex::{HexString, generate_prime_hex_with_rng, is_prime_decimal, is_prime_hex, is_prime_hex_reversed};
pub use num_bigint::BigUint;
pub use presets::{
    DEFAULT_ATTEMPTS_PER_BIT, DEFAULT_MR_ROUNDS, GenerationOptions, PrimalityOptions, is_prime, is_prime_with_rng,
    random_prime, random_prime_with_options,
};
pub use traits::RandomPrimeWithRng;

#[cfg(feature = "default-rng")]
pub use hex::generate_prime_hex;
#[cfg(feature = "default-rng")]
pub use presets::random_prime_os;
