//! Precomputed discrete-log tables for Galois fields.
//!
//! Multiplication, division, inversion, and exponentiation all go through a
//! pair of parallel tables built once at construction: `log` maps a non-zero
//! element to the exponent of a fixed generator, and `exp` maps the exponent
//! back to the element. After the O(q) build, every multiplicative operation
//! is O(1).
//!
//! Addition and subtraction do not use the tables: prime fields use modular
//! integer arithmetic, extension fields add digit-wise in the base-p packing
//! of their polynomial representation.

use crate::error::{Error, Result};
use crate::utils::{factor_prime_power, is_prime};

/// Discrete-log arithmetic tables for a Galois field GF(p^n).
///
/// Elements are represented as integers in `[0, order)`. For extension
/// fields the integer is the base-p packing of the element's polynomial
/// coefficients: `a_0 + a_1*p + ... + a_{n-1}*p^{n-1}`.
#[derive(Debug)]
pub struct GfTables {
    /// The order of the field.
    order: u32,
    /// The prime characteristic.
    characteristic: u32,
    /// The extension degree.
    degree: u32,
    /// Monic irreducible polynomial as `[c_0, ..., c_{n-1}]` with implicit
    /// leading 1; empty for prime fields.
    irreducible: Vec<u32>,
    /// log[e] = discrete log of element e (log[0] is unused).
    log: Vec<u32>,
    /// exp[i] = generator^i for i in 0..order-1.
    exp: Vec<u32>,
}

impl GfTables {
    /// Create tables for a prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not prime or no generator is found.
    pub fn new_prime(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrimePower(p));
        }

        let (log, exp) = build_log_tables(p, |a, b| {
            ((u64::from(a) * u64::from(b)) % u64::from(p)) as u32
        })
        .ok_or(Error::NoGeneratorFound { order: p })?;

        Ok(Self {
            order: p,
            characteristic: p,
            degree: 1,
            irreducible: Vec::new(),
            log,
            exp,
        })
    }

    /// Create tables for an extension field GF(p^n).
    ///
    /// `irreducible` holds the coefficients `[c_0, ..., c_{n-1}]` of a monic
    /// irreducible polynomial `x^n + c_{n-1}x^{n-1} + ... + c_0` over GF(p),
    /// already validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if no generator of the multiplicative group exists,
    /// which for a valid irreducible polynomial cannot happen.
    pub fn new_extension(p: u32, n: u32, irreducible: &[u32]) -> Result<Self> {
        let order = p.pow(n);

        let (log, exp) = build_log_tables(order, |a, b| poly_mul(a, b, p, n, irreducible))
            .ok_or(Error::NoGeneratorFound { order })?;

        Ok(Self {
            order,
            characteristic: p,
            degree: n,
            irreducible: irreducible.to_vec(),
            log,
            exp,
        })
    }

    /// Get the field order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the field characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Get the extension degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Get the irreducible polynomial coefficients (empty for prime fields).
    #[must_use]
    pub fn irreducible(&self) -> &[u32] {
        &self.irreducible
    }

    /// Add two field elements.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else if self.degree == 1 {
            (a + b) % self.order
        } else {
            digit_add(a, b, self.characteristic, self.degree)
        }
    }

    /// Subtract two field elements.
    #[must_use]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        self.add(a, self.neg(b))
    }

    /// Get the additive inverse of an element.
    #[must_use]
    pub fn neg(&self, a: u32) -> u32 {
        if self.characteristic == 2 {
            a
        } else if self.degree == 1 {
            if a == 0 {
                0
            } else {
                self.order - a
            }
        } else {
            digit_neg(a, self.characteristic, self.degree)
        }
    }

    /// Multiply two field elements via the discrete-log tables.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let group_order = self.order - 1;
        let i = (self.log[a as usize] + self.log[b as usize]) % group_order;
        self.exp[i as usize]
    }

    /// Divide two field elements.
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero.
    #[must_use]
    pub fn div(&self, a: u32, b: u32) -> u32 {
        assert!(b != 0, "division by zero in GF({})", self.order);
        if a == 0 {
            return 0;
        }
        let group_order = self.order - 1;
        let i = (self.log[a as usize] + group_order - self.log[b as usize]) % group_order;
        self.exp[i as usize]
    }

    /// Get the multiplicative inverse of an element.
    ///
    /// # Panics
    ///
    /// Panics if `a` is zero.
    #[must_use]
    pub fn inv(&self, a: u32) -> u32 {
        assert!(a != 0, "inverse of zero in GF({})", self.order);
        let group_order = self.order - 1;
        let i = (group_order - self.log[a as usize]) % group_order;
        self.exp[i as usize]
    }

    /// Compute `a^exp` via the discrete-log tables.
    ///
    /// Negative exponents invert; `a^0` is 1 for every `a`, including zero.
    ///
    /// # Panics
    ///
    /// Panics if `a` is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, a: u32, exp: i64) -> u32 {
        if exp == 0 {
            return 1;
        }
        if a == 0 {
            assert!(exp > 0, "negative power of zero in GF({})", self.order);
            return 0;
        }
        let group_order = i64::from(self.order - 1);
        let i = (i64::from(self.log[a as usize]) * exp).rem_euclid(group_order);
        self.exp[i as usize]
    }

    /// Discrete log of a non-zero element.
    ///
    /// # Panics
    ///
    /// Panics if `a` is zero (zero has no discrete log).
    #[must_use]
    pub fn log(&self, a: u32) -> u32 {
        assert!(a != 0, "zero has no discrete log in GF({})", self.order);
        self.log[a as usize]
    }
}

/// Find a generator of the multiplicative group and fill the log/exp pair.
///
/// Tries each non-zero candidate in turn; a candidate generates the group
/// iff its first `order - 1` powers are pairwise distinct.
fn build_log_tables(order: u32, mul: impl Fn(u32, u32) -> u32) -> Option<(Vec<u32>, Vec<u32>)> {
    let group_order = (order - 1) as usize;

    'candidate: for g in 1..order {
        let mut log = vec![0u32; order as usize];
        let mut exp = vec![0u32; group_order];
        let mut seen = vec![false; order as usize];

        let mut cur = 1u32;
        for i in 0..group_order {
            if cur == 0 || seen[cur as usize] {
                continue 'candidate;
            }
            seen[cur as usize] = true;
            exp[i] = cur;
            log[cur as usize] = i as u32;
            cur = mul(cur, g);
        }

        if cur == 1 {
            return Some((log, exp));
        }
    }

    None
}

/// Coefficient-wise addition in the base-p packing.
fn digit_add(a: u32, b: u32, p: u32, n: u32) -> u32 {
    let mut result = 0u32;
    let mut pow_p = 1u32;
    let (mut a, mut b) = (a, b);

    for _ in 0..n {
        let sum = (a % p + b % p) % p;
        result += sum * pow_p;
        a /= p;
        b /= p;
        pow_p *= p;
    }

    result
}

/// Coefficient-wise negation in the base-p packing.
fn digit_neg(a: u32, p: u32, n: u32) -> u32 {
    let mut result = 0u32;
    let mut pow_p = 1u32;
    let mut a = a;

    for _ in 0..n {
        let coef = a % p;
        let neg = if coef == 0 { 0 } else { p - coef };
        result += neg * pow_p;
        a /= p;
        pow_p *= p;
    }

    result
}

/// Multiply two packed polynomials and reduce modulo the irreducible
/// polynomial `x^n + c_{n-1}x^{n-1} + ... + c_0`.
pub(crate) fn poly_mul(a: u32, b: u32, p: u32, n: u32, irreducible: &[u32]) -> u32 {
    let n = n as usize;
    let mut a_coeffs = vec![0u32; n];
    let mut b_coeffs = vec![0u32; n];
    let (mut ta, mut tb) = (a, b);

    for i in 0..n {
        a_coeffs[i] = ta % p;
        b_coeffs[i] = tb % p;
        ta /= p;
        tb /= p;
    }

    let mut product = vec![0u32; 2 * n - 1];
    for i in 0..n {
        for j in 0..n {
            product[i + j] = (product[i + j] + a_coeffs[i] * b_coeffs[j]) % p;
        }
    }

    // x^n = -c_{n-1}x^{n-1} - ... - c_0 (mod irreducible)
    for i in (n..product.len()).rev() {
        if product[i] != 0 {
            let coef = product[i];
            product[i] = 0;
            for j in 0..n {
                let sub = (coef * irreducible[j]) % p;
                product[i - n + j] = (product[i - n + j] + p - sub) % p;
            }
        }
    }

    let mut result = 0u32;
    let mut pow_p = 1u32;
    for &c in product.iter().take(n) {
        result += c * pow_p;
        pow_p *= p;
    }

    result
}

/// Create tables for an arbitrary prime-power order using the built-in
/// irreducible polynomial database.
pub(crate) fn for_order(q: u32) -> Result<GfTables> {
    let factorization = factor_prime_power(q).ok_or(Error::NotPrimePower(q))?;

    if factorization.exponent == 1 {
        return GfTables::new_prime(q);
    }

    let p = factorization.prime;
    let n = factorization.exponent;
    let irreducible =
        super::irreducible::get_irreducible_poly(p, n).ok_or(Error::NoIrreduciblePolynomial(q))?;

    GfTables::new_extension(p, n, &irreducible)
}
