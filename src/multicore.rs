//! Prime-finding functions that can parallelize across multiple cores.

use core::num::NonZeroU32;

use num_bigint::BigUint;
use rand_core::{CryptoRng, SeedableRng};
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::{
    error::Error,
    hazmat::{SetBits, random_odd_integer},
    presets::{GenerationOptions, checked_bit_length, is_prime_with_rng},
};

/// An endless stream of random odd candidates, each paired with an RNG forked from the source one,
/// so that the primality check of every candidate has its own randomness.
#[derive(Debug)]
struct CandidateIterator<'a, R> {
    rng: &'a mut R,
    bit_length: NonZeroU32,
    set_bits: SetBits,
}

impl<R> Iterator for CandidateIterator<'_, R>
where
    R: CryptoRng + SeedableRng,
{
    type Item = (R, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = random_odd_integer(self.rng, self.bit_length, self.set_bits).get();
        Some((self.rng.fork(), candidate))
    }
}

/// Returns a random prime of size `bit_length` using the provided RNG.
///
/// Uses `threadcount` cores to parallelize the prime search.
/// The candidates are drawn and tested as in [`random_prime_with_options`](crate::random_prime_with_options),
/// and the attempt cap applies to the total number of candidates across all the threads.
///
/// Panics if the platform is unable to spawn threads.
pub fn random_prime<R>(
    rng: &mut R,
    bit_length: u32,
    options: GenerationOptions,
    threadcount: usize,
) -> Result<BigUint, Error>
where
    R: CryptoRng + Send + Sync + SeedableRng,
{
    let bit_length = checked_bit_length(bit_length)?;
    let attempts = options.attempt_cap(bit_length);
    let primality_options = options.primality_options();

    let threadpool = rayon::ThreadPoolBuilder::new()
        .num_threads(threadcount)
        .build()
        .expect("If the platform can spawn threads, then this call will work.");

    let candidates = CandidateIterator {
        rng,
        bit_length,
        set_bits: options.set_bits,
    }
    .take(attempts);

    threadpool
        .install(|| {
            candidates.par_bridge().find_map_any(|(mut rng, candidate)| {
                is_prime_with_rng(&mut rng, &candidate, primality_options).then_some(candidate)
            })
        })
        .ok_or(Error::GenerationFailed { attempts })
}
