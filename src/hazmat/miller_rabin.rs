//! Strong probable prime test (Miller-Rabin), and the FIPS-186.5 round count estimate.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRng;

use super::{
    Odd, Primality, equals_primitive,
    float::{two_powf_upper_bound, two_powi},
    random_mod,
};

/// The Miller-Rabin test[^Pomerance1980] for a fixed odd candidate `n`.
///
/// Writing `n - 1 = 2^s * d` with `d` odd, `n` passes for base `a` if `a^d = 1 (mod n)`,
/// or `a^(d * 2^r) = -1 (mod n)` for some `0 <= r < s`.
/// Every prime passes for every base; a composite passing for base `a` is a strong pseudoprime to base `a`,
/// and at most a quarter of the bases in `[1, n - 1]` let any given composite through.
///
/// The decomposition of `n - 1` is computed once in [`MillerRabin::new`] and reused for every base.
///
/// [^Pomerance1980]:
///   C. Pomerance, J. L. Selfridge, S. S. Wagstaff "The Pseudoprimes to 25*10^9",
///   Math. Comp. 35 1003-1026 (1980),
///   DOI: [10.2307/2006210](https://dx.doi.org/10.2307/2006210)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MillerRabin {
    modulus: BigUint,
    /// `n - 1`, the residue of `-1`.
    minus_one: BigUint,
    /// The odd part `d` of `n - 1`.
    odd_part: BigUint,
    /// The exponent `s` of the power of two in `n - 1`.
    twos: u64,
}

impl MillerRabin {
    /// Prepares the test for `candidate`.
    pub fn new(candidate: Odd) -> Self {
        let modulus = candidate.get();
        let minus_one = &modulus - 1u32;

        // `n - 1` is zero only for `n == 1`, which has no decomposition; any values do there.
        let (twos, odd_part) = match minus_one.trailing_zeros() {
            Some(twos) => (twos, &minus_one >> twos),
            None => (0, BigUint::one()),
        };

        Self {
            modulus,
            minus_one,
            odd_part,
            twos,
        }
    }

    /// Runs the test with the given base.
    pub fn test(&self, base: &BigUint) -> Primality {
        let mut power = base.modpow(&self.odd_part, &self.modulus);
        if power.is_one() || power == self.minus_one {
            return Primality::ProbablyPrime;
        }

        for _ in 1..self.twos {
            power = &power * &power % &self.modulus;
            if power == self.minus_one {
                return Primality::ProbablyPrime;
            }
            if power.is_one() {
                // The previous power is a square root of 1 other than 1 and -1.
                break;
            }
        }

        Primality::Composite
    }

    /// Runs the test with base 2.
    pub fn test_base_two(&self) -> Primality {
        self.test(&BigUint::from(2u32))
    }

    /// Runs the test with a base drawn uniformly from `[2, n - 2]` using the provided RNG.
    ///
    /// Bases 1 and `n - 1` are excluded since every odd number passes for them.
    /// For `n == 1` and `n == 3` that range is empty, and the conventional answer is returned
    /// ([`Primality::Composite`] and [`Primality::Prime`] respectively).
    pub fn test_random_base<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Primality {
        if equals_primitive(&self.modulus, 1) {
            return Primality::Composite;
        }
        if equals_primitive(&self.modulus, 3) {
            return Primality::Prime;
        }

        // `n >= 5` here, so the range is non-empty.
        let base = random_mod(rng, &(&self.modulus - 3u32)) + 2u32;
        self.test(&base)
    }

    /// Returns the bit length of the candidate.
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }
}

/**
An upper bound on the probability that a random odd `bits`-bit integer passing `rounds` rounds
of the test with random bases is composite, for the given value of the free parameter `M`.

This is Eq. (2) from FIPS-186.5[^FIPS], Section C.1, which quotes Eq. (4.1) of Damgård et al[^Damgard]
(bounded with Propositions 1 and 2 there):

```text
p(bits, rounds) <= 2.00743 ln(2) bits 2^(-2) (
    2^(-M rounds)
    + 8 (pi^2 - 6) / 3 * sum(m=3..M) sum(j=2..m) 2^(m - (m - 1) rounds - j - (bits - 1) / j)
)
```

The bound only holds for random candidates; for a chosen input only `4^(-rounds)` is guaranteed.

[^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>
[^Damgard]:
    Damgård I, Landrock P, Pomerance C (1993) Average Case Error Estimates for the Strong
    Probable Prime Test. Mathematics of Computation 61(203):177-194 (1993),
    <https://www.ams.org/journals/mcom/1993-61-203/S0025-5718-1993-1189518-9/S0025-5718-1993-1189518-9.pdf>
*/
const fn composite_probability_bound(bits: u32, rounds: u32, max_m: u32) -> f64 {
    const PI: f64 = core::f64::consts::PI;
    // `2.00743 * ln(2) / 4`
    const SCALE: f64 = 0.3478611111678627;

    let bits_f = bits as f64;
    let rounds_i = rounds as i64;

    let mut double_sum = 0.;
    let mut m = 3;
    while m <= max_m {
        let m_i = m as i64;
        let mut j = 2;
        while j <= m {
            let exponent = (m_i - (m_i - 1) * rounds_i - j as i64) as f64 - (bits_f - 1.) / j as f64;
            // Rounds each term up, keeping the total an upper bound.
            double_sum += two_powf_upper_bound(exponent);
            j += 1;
        }
        m += 1;
    }

    SCALE * bits_f * (1. / two_powi(max_m * rounds) + 8. * (PI * PI - 6.) / 3. * double_sum)
}

/// Returns the number of Miller-Rabin rounds with random bases that bring the probability of accepting
/// a composite below `2^(-log2_target)`, for a *random* candidate of `bit_length` bits,
/// as prescribed by FIPS-186.5[^FIPS], Appendix C.1.
///
/// Returns `None` if `bit_length < 2`, or if no round count up to `(log2_target + 1) / 2`
/// (which is enough for any input) achieves the target under the estimate.
///
/// [^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>
pub const fn minimum_mr_iterations(bit_length: u32, log2_target: u32) -> Option<usize> {
    if bit_length < 2 {
        return None;
    }

    let target = 1. / two_powi(log2_target);
    // `M` ranges over `3 <= M <= 2 sqrt(bits - 1) - 1`.
    let max_m_limit = (4 * (bit_length - 1)).isqrt() - 1;

    let mut rounds = 1;
    while rounds <= log2_target.div_ceil(2) {
        let mut max_m = 3;
        while max_m <= max_m_limit {
            if composite_probability_bound(bit_length, rounds, max_m) < target {
                return Some(rounds as usize);
            }
            max_m += 1;
        }
        rounds += 1;
    }

    None
}
