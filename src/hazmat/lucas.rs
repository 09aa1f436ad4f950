//! Lucas primality test.
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::{
    Odd, Primality,
    jacobi::{JacobiSymbol, equals_abs, is_square, jacobi_symbol},
};

/// The maximum number of attempts to find `D` such that `(D/n) == -1`.
// This is widely believed to be impossible.
// So if we exceed it, we will panic reporting the value of `n`.
const MAX_ATTEMPTS: u32 = 10000;

/// The number of attempts to find `D` such that `(D/n) == -1`
/// before checking that `n` is a square (in which case such `D` does not exist).
// This check is relatively expensive compared to calculating the Jacobi symbol,
// while for a non-square `n` a suitable `D` is expected within a few attempts.
const ATTEMPTS_BEFORE_SQRT: u32 = 30;

/// A method for selecting the base `(P, Q)` for the Lucas primality test.
pub trait LucasBase {
    /// Given an odd integer, returns `Ok((P, Q))` on success,
    /// or `Err(Primality)` if the primality for the given integer was discovered
    /// during the search for the base.
    fn generate(&self, n: &Odd) -> Result<(u32, i64), Primality>;
}

/// "Method A" for selecting the base given in Baillie & Wagstaff[^Baillie1980],
/// attributed to Selfridge.
///
/// [^Baillie1980]:
///   R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
///   Math. Comp. 35 1391-1417 (1980),
///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
#[derive(Copy, Clone, Debug)]
pub struct SelfridgeBase;

impl LucasBase for SelfridgeBase {
    fn generate(&self, n: &Odd) -> Result<(u32, i64), Primality> {
        // Try D = 1 - 4Q = 5, -7, 9, -11, 13, ... until Jacobi(D, n) = -1.
        // Return P = 1, Q = (1 - D) / 4).

        let mut d = 5_i64;
        let mut attempts = 0;
        loop {
            if attempts >= MAX_ATTEMPTS {
                panic!("internal error: cannot find (D/n) = -1 for {:?}", n)
            }

            if attempts >= ATTEMPTS_BEFORE_SQRT && is_square(n) {
                return Err(Primality::Composite);
            }

            let j = jacobi_symbol(d, n);

            if j == JacobiSymbol::MinusOne {
                break;
            }
            if j == JacobiSymbol::Zero {
                // Modification of Method A by Baillie, in an example to OEIS:A217120
                // (https://oeis.org/A217120/a217120_1.txt):
                // If `d == (+,-)n`, (e.g., `n` = 5 or 11) try the next `d` instead of quitting;
                // this small modification of Selfridge's method A
                // enables 5 and 11 to be classified as Lucas probable primes.
                // Otherwise GCD(D, n) > 1, and therefore n is not prime.
                if !equals_abs(n, d) {
                    return Err(Primality::Composite);
                }
            }

            attempts += 1;
            d = -d;
            d += d.signum() * 2;
        }

        // No remainder by construction of `d`.
        let q = (1 - d) / 4;

        Ok((1, q))
    }
}

/// "Method A*" for selecting the base given in Baillie et al[^Baillie2021].
///
/// The same as [`SelfridgeBase`], but if `Q = -1` is selected, `P = Q = 5` is used instead.
///
/// [^Baillie2021]: R. Baillie, A. Fiori, S. S. Wagstaff,
///   "Strengthening the Baillie-PSW primality test",
///   Math. Comp. 90 1931-1955 (2021),
///   DOI: [10.1090/mcom/3616](https://doi.org/10.1090/mcom/3616)
#[derive(Copy, Clone, Debug)]
pub struct AStarBase;

impl LucasBase for AStarBase {
    fn generate(&self, n: &Odd) -> Result<(u32, i64), Primality> {
        SelfridgeBase
            .generate(n)
            .map(|(p, q)| if q == -1 { (5, 5) } else { (p, q) })
    }
}

/// The variant of Lucas test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LucasCheck {
    /// Introduced by Baillie & Wagstaff[^Baillie1980].
    /// If `U(n - (D/n)) == 0`, report the number as prime.
    ///
    /// If the base is [`SelfridgeBase`], known false positives constitute OEIS:A217120[^A217120].
    ///
    /// [^Baillie1980]: R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
    ///   Math. Comp. 35 1391-1417 (1980),
    ///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
    ///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
    ///
    /// [^A217120]: <https://oeis.org/A217120>
    Regular,

    /// Introduced by Baillie & Wagstaff[^Baillie1980].
    /// With `d * 2^s == n - (D/n)`, `d` odd, if `U(d) == 0`, or `V(d * 2^r) == 0`
    /// for some `0 <= r < s`, report the number as prime.
    ///
    /// If the base is [`SelfridgeBase`], known false positives constitute OEIS:A217255[^A217255].
    ///
    /// [^Baillie1980]: R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
    ///   Math. Comp. 35 1391-1417 (1980),
    ///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
    ///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
    ///
    /// [^A217255]: <https://oeis.org/A217255>
    Strong,
}

/// Arithmetic modulo the (odd) candidate.
struct Residues<'a> {
    n: &'a BigUint,
}

impl Residues<'_> {
    fn residue(&self, x: i64) -> BigUint {
        let abs = BigUint::from(x.unsigned_abs()) % self.n;
        if x < 0 && !abs.is_zero() { self.n - abs } else { abs }
    }

    fn add_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.n
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + self.n - b) % self.n
    }

    fn mul_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b % self.n
    }

    /// Division by 2, which is invertible since `n` is odd.
    fn half(&self, a: BigUint) -> BigUint {
        if a.is_odd() { (a + self.n) >> 1u32 } else { a >> 1u32 }
    }
}

/// The elements `U_k`, `V_k` of the Lucas sequences for `(P, Q)`, along with `Q^k`, all modulo `n`.
struct LucasElements {
    u: BigUint,
    v: BigUint,
    qk: BigUint,
}

/// Computes the `k`-th elements of the Lucas sequences defined by
///
/// ```text
/// U_0 = 0, U_1 = 1, U_k = P U_{k-1} - Q U_{k-2},
/// V_0 = 2, V_1 = P, V_k = P V_{k-1} - Q V_{k-2},
/// ```
///
/// for `k >= 1`, using the doubling formulas ([^Crandall2005], eq. (3.13)-(3.14)):
///
/// ```text
/// U_{2k} = U_k V_k,              V_{2k} = V_k^2 - 2 Q^k,
/// U_{2k+1} = (P U_{2k} + V_{2k}) / 2,  V_{2k+1} = (D U_{2k} + P V_{2k}) / 2,
/// ```
///
/// where `D = P^2 - 4Q`.
///
/// [^Crandall2005]:
///   R. Crandall, C. Pomerance, "Prime numbers: a computational perspective",
///   2nd ed., Springer (2005) (ISBN: 0-387-25282-7, 978-0387-25282-7)
fn lucas_elements(m: &Residues<'_>, p: &BigUint, q: &BigUint, d: &BigUint, k: &BigUint) -> LucasElements {
    debug_assert!(!k.is_zero());

    let mut u = BigUint::one();
    let mut v = p.clone();
    let mut qk = q.clone();

    for i in (0..k.bits() - 1).rev() {
        // k' = 2k
        u = m.mul_mod(&u, &v);
        let two_qk = m.add_mod(&qk, &qk);
        v = m.sub_mod(&m.mul_mod(&v, &v), &two_qk);
        qk = m.mul_mod(&qk, &qk);

        if k.bit(i) {
            // k' = 2k + 1
            let pu = m.mul_mod(p, &u);
            let du = m.mul_mod(d, &u);
            let pv = m.mul_mod(p, &v);
            u = m.half(m.add_mod(&pu, &v));
            v = m.half(m.add_mod(&du, &pv));
            qk = m.mul_mod(&qk, q);
        }
    }

    LucasElements { u, v, qk }
}

/// Performs the Lucas primality test by Baillie & Wagstaff[^Baillie1980]
/// of the kind selected by `check`, with the base selected by `base`.
///
/// [^Baillie1980]:
///   R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
///   Math. Comp. 35 1391-1417 (1980),
///   DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
///   <http://mpqs.free.fr/LucasPseudoprimes.pdf>
pub fn lucas_test(candidate: Odd, base: impl LucasBase, check: LucasCheck) -> Primality {
    // Find the base for the Lucas sequence.
    let (p, q) = match base.generate(&candidate) {
        Ok(pq) => pq,
        Err(primality) => return primality,
    };

    let n = candidate.get();
    let m = Residues { n: &n };

    // `D = P^2 - 4Q`, with `(D/n) = -1` by construction of the base,
    // so the test is concerned with the index `n + 1`.
    let discriminant = i64::from(p) * i64::from(p) - 4 * q;
    let p_m = m.residue(p.into());
    let q_m = m.residue(q);
    let d_m = m.residue(discriminant);

    let n_plus_one = &n + 1u32;

    match check {
        LucasCheck::Regular => {
            let elements = lucas_elements(&m, &p_m, &q_m, &d_m, &n_plus_one);
            if elements.u.is_zero() {
                Primality::ProbablyPrime
            } else {
                Primality::Composite
            }
        }
        LucasCheck::Strong => {
            // Find d and s, such that d is odd and d * 2^s = n + 1.
            let s = n_plus_one.trailing_zeros().unwrap_or(0);
            let d = &n_plus_one >> s;

            let LucasElements { u, mut v, mut qk } = lucas_elements(&m, &p_m, &q_m, &d_m, &d);

            if u.is_zero() || v.is_zero() {
                return Primality::ProbablyPrime;
            }

            // Check if V_{d*2^r} == 0 for some 0 < r < s.
            for _ in 1..s {
                let two_qk = m.add_mod(&qk, &qk);
                v = m.sub_mod(&m.mul_mod(&v, &v), &two_qk);
                qk = m.mul_mod(&qk, &qk);
                if v.is_zero() {
                    return Primality::ProbablyPrime;
                }
            }

            Primality::Composite
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    #[cfg(feature = "tests-exhaustive")]
    use num_prime::nt_funcs::is_prime64;

    use super::{AStarBase, LucasBase, LucasCheck, Residues, SelfridgeBase, lucas_elements, lucas_test};
    use crate::hazmat::{Odd, Primality, primes, pseudoprimes};

    fn odd(num: u64) -> Odd {
        Odd::new(BigUint::from(num)).unwrap()
    }

    fn is_slpsp(num: u32) -> bool {
        pseudoprimes::STRONG_LUCAS.iter().any(|x| *x == num)
    }

    fn is_lpsp(num: u32) -> bool {
        pseudoprimes::LUCAS.iter().any(|x| *x == num)
    }

    fn test_composites(numbers: &[u32], check: LucasCheck, expected_result: bool) {
        for num in numbers.iter() {
            let false_positive = match check {
                LucasCheck::Strong => is_slpsp(*num),
                LucasCheck::Regular => is_lpsp(*num),
            };
            let actual_expected_result = if false_positive { true } else { expected_result };

            assert_eq!(
                lucas_test(odd((*num).into()), SelfridgeBase, check).is_probably_prime(),
                actual_expected_result,
                "Selfridge base, n = {num}, check = {check:?}",
            );
        }
    }

    #[test]
    fn sequence_elements() {
        // Fibonacci and Lucas numbers: P = 1, Q = -1, D = 5, taken modulo a large odd modulus.
        let n = BigUint::from(1_000_000_007u64);
        let m = Residues { n: &n };
        let (p, q, d) = (m.residue(1), m.residue(-1), m.residue(5));

        let fibonacci = [1u32, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
        let lucas = [1u32, 3, 4, 7, 11, 18, 29, 47, 76, 123, 199, 322];
        for k in 1..=12u32 {
            let elements = lucas_elements(&m, &p, &q, &d, &BigUint::from(k));
            assert_eq!(elements.u, BigUint::from(fibonacci[k as usize - 1]), "U_{k}");
            assert_eq!(elements.v, BigUint::from(lucas[k as usize - 1]), "V_{k}");
            let expected_qk = if k % 2 == 0 { BigUint::from(1u32) } else { &n - 1u32 };
            assert_eq!(elements.qk, expected_qk, "Q^{k}");
        }
    }

    #[test]
    fn base_selection() {
        // (5/7) = -1, so Selfridge picks D = 5, P = 1, Q = -1; A* replaces that with P = Q = 5.
        assert_eq!(SelfridgeBase.generate(&odd(7)), Ok((1, -1)));
        assert_eq!(AStarBase.generate(&odd(7)), Ok((5, 5)));

        // (5/11) = (-7/11) = (9/11) = 1, -11 is skipped, (13/11) = -1, so D = 13, Q = -3.
        assert_eq!(SelfridgeBase.generate(&odd(11)), Ok((1, -3)));
        assert_eq!(AStarBase.generate(&odd(11)), Ok((1, -3)));

        // (5/5) = 0 is skipped, (-7/5) = -1, so D = -7, Q = 2.
        assert_eq!(SelfridgeBase.generate(&odd(5)), Ok((1, 2)));

        // A shared factor with D.
        assert_eq!(SelfridgeBase.generate(&odd(35)), Err(Primality::Composite));

        // A perfect square never yields (D/n) = -1.
        assert_eq!(SelfridgeBase.generate(&odd(10007 * 10007)), Err(Primality::Composite));
    }

    #[test]
    fn small_primes() {
        for num in [5u64, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 7919, 0xFFFF_FFFF_FFFF_FFC5] {
            for check in [LucasCheck::Regular, LucasCheck::Strong] {
                assert!(lucas_test(odd(num), SelfridgeBase, check).is_probably_prime(), "n = {num}");
                assert!(lucas_test(odd(num), AStarBase, check).is_probably_prime(), "n = {num}");
            }
        }
    }

    #[test]
    fn strong_fibonacci_pseudoprimes() {
        for num in pseudoprimes::STRONG_FIBONACCI.iter() {
            assert!(!lucas_test(odd(*num), SelfridgeBase, LucasCheck::Strong).is_probably_prime());
            assert!(!lucas_test(odd(*num), AStarBase, LucasCheck::Strong).is_probably_prime());
        }
    }

    #[test]
    fn fibonacci_pseudoprimes() {
        test_composites(pseudoprimes::FIBONACCI, LucasCheck::Strong, false);
        test_composites(pseudoprimes::FIBONACCI, LucasCheck::Regular, false);
    }

    #[test]
    fn bruckman_lucas_pseudoprimes() {
        test_composites(pseudoprimes::BRUCKMAN_LUCAS, LucasCheck::Strong, false);
        test_composites(pseudoprimes::BRUCKMAN_LUCAS, LucasCheck::Regular, false);
    }

    #[test]
    fn lucas_pseudoprimes() {
        // These are the known false positives for the regular test with Selfridge base selection.
        test_composites(pseudoprimes::LUCAS, LucasCheck::Regular, true);
        test_composites(pseudoprimes::LUCAS, LucasCheck::Strong, false);
    }

    #[test]
    fn strong_lucas_pseudoprimes() {
        // These are the known false positives for the strong test with Selfridge base selection.
        // Every strong Lucas pseudoprime is also a Lucas pseudoprime.
        test_composites(pseudoprimes::STRONG_LUCAS, LucasCheck::Strong, true);
        test_composites(pseudoprimes::STRONG_LUCAS, LucasCheck::Regular, true);
    }

    #[test]
    fn strong_pseudoprimes_base_2() {
        // Cross-test against the pseudoprimes that circumvent the MR test base 2.
        // We expect the Lucas test to correctly classify them as composites.
        test_composites(pseudoprimes::STRONG_BASE_2, LucasCheck::Strong, false);
        test_composites(pseudoprimes::STRONG_BASE_2, LucasCheck::Regular, false);
    }

    #[test]
    fn large_carmichael_number() {
        let p = Odd::new(pseudoprimes::large_carmichael_number()).unwrap();
        assert!(!lucas_test(p.clone(), SelfridgeBase, LucasCheck::Strong).is_probably_prime());
        assert!(!lucas_test(p, AStarBase, LucasCheck::Strong).is_probably_prime());
    }

    #[test]
    fn large_primes() {
        for num in primes::large_primes() {
            let num = Odd::new(num).unwrap();
            assert!(lucas_test(num.clone(), SelfridgeBase, LucasCheck::Strong).is_probably_prime());
            assert!(lucas_test(num.clone(), SelfridgeBase, LucasCheck::Regular).is_probably_prime());
            assert!(lucas_test(num, AStarBase, LucasCheck::Strong).is_probably_prime());
        }
    }

    #[cfg(feature = "tests-exhaustive")]
    #[test]
    fn exhaustive() {
        // Test all the odd numbers up to the limit where we know the false positives,
        // and compare the results with the reference.
        for num in (3..pseudoprimes::EXHAUSTIVE_TEST_LIMIT).step_by(2) {
            let res_ref = is_prime64(num.into());

            let res = lucas_test(odd(num.into()), SelfridgeBase, LucasCheck::Strong).is_probably_prime();
            let expected = is_slpsp(num) || res_ref;
            assert_eq!(res, expected, "Selfridge base, strong: n={num}, expected={expected}, actual={res}");

            let res = lucas_test(odd(num.into()), SelfridgeBase, LucasCheck::Regular).is_probably_prime();
            let expected = is_lpsp(num) || res_ref;
            assert_eq!(res, expected, "Selfridge base, regular: n={num}, expected={expected}, actual={res}");
        }
    }
}
