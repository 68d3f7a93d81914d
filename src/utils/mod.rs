//! Number-theoretic helpers.
//!
//! These utilities back Galois field construction: validating that a field
//! order is a prime power and splitting it into its `(prime, exponent)` pair.

mod primality;

pub use primality::{factor_prime_power, is_prime, is_prime_power, PrimePowerFactorization};

/// Compute `base^exp mod modulus` using binary exponentiation.
///
/// Runs in O(log exp) multiplications.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use listdecode::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 1024 mod 1000
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 243 mod 7
/// ```
#[must_use]
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    base %= modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base) % modulus;
        }
        exp >>= 1;
        base = base.wrapping_mul(base) % modulus;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(2, 0, 7), 1);
        assert_eq!(mod_pow(0, 5, 7), 0);
        assert_eq!(mod_pow(3, 4, 5), 1); // 81 mod 5
        assert_eq!(mod_pow(7, 3, 11), 2); // 343 mod 11
    }
}
