//! Primality testing and prime power factorization.
//!
//! Field construction needs to know whether a requested order is a prime
//! power and, if so, what the prime characteristic and extension degree are.

use super::mod_pow;

/// Result of factoring a prime power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimePowerFactorization {
    /// The prime base.
    pub prime: u32,
    /// The exponent (power).
    pub exponent: u32,
}

impl PrimePowerFactorization {
    /// Compute the value p^k.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.prime).pow(self.exponent)
    }
}

/// Test if a number is prime using the Miller-Rabin primality test.
///
/// For n < 2^32 this is deterministic using a fixed witness set.
///
/// # Examples
///
/// ```
/// use listdecode::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(19));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }
    if n % 3 == 0 {
        return false;
    }

    // Witnesses sufficient for deterministic testing of all 32-bit integers.
    let witnesses: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    let n_minus_1 = u64::from(n - 1);
    let r = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> r;

    'witness: for &a in witnesses {
        if a >= u64::from(n) {
            continue;
        }

        let mut x = mod_pow(a, d, u64::from(n));

        if x == 1 || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..(r - 1) {
            x = x.wrapping_mul(x) % u64::from(n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Test if a number is a prime power (p^k for some prime p and k >= 1).
///
/// # Examples
///
/// ```
/// use listdecode::utils::is_prime_power;
///
/// assert!(is_prime_power(8));   // 2^3
/// assert!(is_prime_power(19));  // 19^1
/// assert!(!is_prime_power(6));  // 2 * 3
/// assert!(!is_prime_power(1));
/// ```
#[must_use]
pub fn is_prime_power(n: u32) -> bool {
    factor_prime_power(n).is_some()
}

/// Factor a number as a prime power if possible.
///
/// Returns `Some(PrimePowerFactorization { prime, exponent })` if
/// `n = prime^exponent`, otherwise `None`.
#[must_use]
pub fn factor_prime_power(n: u32) -> Option<PrimePowerFactorization> {
    if n < 2 {
        return None;
    }

    if is_prime(n) {
        return Some(PrimePowerFactorization {
            prime: n,
            exponent: 1,
        });
    }

    if n.is_power_of_two() {
        return Some(PrimePowerFactorization {
            prime: 2,
            exponent: n.trailing_zeros(),
        });
    }

    // If n = p^k with k >= 2, then p is the integer k-th root of n.
    let max_exp = 32 - n.leading_zeros();
    for k in 2..=max_exp {
        if let Some(root) = integer_kth_root(u64::from(n), k) {
            let root = root as u32;
            if root > 1
                && is_prime(root)
                && root.checked_pow(k).is_some_and(|v| v == n)
            {
                return Some(PrimePowerFactorization {
                    prime: root,
                    exponent: k,
                });
            }
        }
    }

    None
}

/// Compute the integer k-th root of n (`floor(n^(1/k))`) by Newton iteration.
fn integer_kth_root(n: u64, k: u32) -> Option<u64> {
    if k == 0 {
        return None;
    }
    if n == 0 {
        return Some(0);
    }
    if k == 1 || n == 1 {
        return Some(n);
    }

    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << ((bits + k - 1) / k);

    loop {
        let x_pow_k_minus_1 = match x.checked_pow(k - 1) {
            Some(v) => v,
            None => {
                x /= 2;
                continue;
            }
        };

        if x_pow_k_minus_1 == 0 {
            return Some(x);
        }

        let new_x = ((u64::from(k) - 1) * x + n / x_pow_k_minus_1) / u64::from(k);

        if new_x >= x {
            if let Some(x_pow_k) = x.checked_pow(k) {
                if x_pow_k == n {
                    return Some(x);
                }
            }
            return None;
        }

        x = new_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        for p in [2u32, 3, 5, 7, 11, 13, 17, 19, 23, 97, 101, 1009, 65_537] {
            assert!(is_prime(p), "{} should be prime", p);
        }
        for c in [0u32, 1, 4, 6, 8, 9, 10, 100, 561, 1105, 1729] {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }

    #[test]
    fn test_is_prime_power() {
        for q in [2u32, 4, 8, 16, 3, 9, 27, 81, 5, 25, 125, 7, 19, 49] {
            assert!(is_prime_power(q), "{} should be a prime power", q);
        }
        for q in [0u32, 1, 6, 10, 12, 15, 18, 20, 36] {
            assert!(!is_prime_power(q), "{} should not be a prime power", q);
        }
    }

    #[test]
    fn test_factor_prime_power() {
        assert_eq!(
            factor_prime_power(8),
            Some(PrimePowerFactorization {
                prime: 2,
                exponent: 3
            })
        );
        assert_eq!(
            factor_prime_power(27),
            Some(PrimePowerFactorization {
                prime: 3,
                exponent: 3
            })
        );
        assert_eq!(
            factor_prime_power(19),
            Some(PrimePowerFactorization {
                prime: 19,
                exponent: 1
            })
        );
        assert_eq!(factor_prime_power(6), None);
        assert_eq!(factor_prime_power(1), None);
    }

    #[test]
    fn test_factorization_value() {
        let f = PrimePowerFactorization {
            prime: 2,
            exponent: 10,
        };
        assert_eq!(f.value(), 1024);
    }
}
