//! Irreducible polynomials for extension field construction.
//!
//! Constructing GF(p^n) requires a monic irreducible polynomial of degree n
//! over GF(p). This module provides a database of such polynomials for
//! common field orders, plus an exhaustive irreducibility test for
//! caller-supplied polynomials.
//!
//! A polynomial is represented as a coefficient vector
//! `[c_0, c_1, ..., c_{n-1}]` for `x^n + c_{n-1}x^{n-1} + ... + c_1x + c_0`;
//! the leading coefficient is always 1 and is implicit.

/// Lookup table of irreducible polynomials keyed by `(p, n)`.
///
/// These are primitive polynomials where possible, so the residue class of
/// `x` generates the multiplicative group.
pub static IRREDUCIBLE_POLYS: &[(u32, u32, &[u32])] = &[
    // GF(2^n)
    // x^2 + x + 1
    (2, 2, &[1, 1]),
    // x^3 + x + 1
    (2, 3, &[1, 1, 0]),
    // x^4 + x + 1
    (2, 4, &[1, 1, 0, 0]),
    // x^5 + x^2 + 1
    (2, 5, &[1, 0, 1, 0, 0]),
    // x^6 + x + 1
    (2, 6, &[1, 1, 0, 0, 0, 0]),
    // x^7 + x^3 + 1
    (2, 7, &[1, 0, 0, 1, 0, 0, 0]),
    // x^8 + x^4 + x^3 + x + 1
    (2, 8, &[1, 1, 0, 1, 1, 0, 0, 0]),
    // GF(3^n)
    // x^2 + 1
    (3, 2, &[1, 0]),
    // x^3 + 2x + 1
    (3, 3, &[1, 2, 0]),
    // x^4 + 2x^3 + 2
    (3, 4, &[2, 0, 0, 2]),
    // GF(5^n)
    // x^2 + 2
    (5, 2, &[2, 0]),
    // x^3 + x + 1
    (5, 3, &[1, 1, 0]),
    // GF(7^n)
    // x^2 + 1
    (7, 2, &[1, 0]),
    // GF(11^n)
    // x^2 + 1
    (11, 2, &[1, 0]),
    // GF(13^n)
    // x^2 + 2
    (13, 2, &[2, 0]),
];

/// Get an irreducible polynomial for GF(p^n) from the database.
///
/// Returns `None` if no polynomial is available for the given parameters.
#[must_use]
pub fn get_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(poly_p, poly_n, _)| poly_p == p && poly_n == n)
        .map(|&(_, _, coeffs)| coeffs.to_vec())
}

/// Check if an irreducible polynomial is available for GF(p^n).
#[must_use]
pub fn has_irreducible_poly(p: u32, n: u32) -> bool {
    get_irreducible_poly(p, n).is_some()
}

/// Test whether a monic polynomial of degree n over GF(p) is irreducible.
///
/// `coeffs` are the low-order coefficients `[c_0, ..., c_{n-1}]` with the
/// leading 1 implicit. The test is trial division: a reducible polynomial of
/// degree n has a monic factor of degree at most n/2, and for table-scale
/// fields enumerating all of those is cheap.
#[must_use]
pub fn is_irreducible(p: u32, coeffs: &[u32]) -> bool {
    let n = coeffs.len();
    if n == 0 {
        return false;
    }
    if coeffs.iter().any(|&c| c >= p) {
        return false;
    }
    if n == 1 {
        // Every monic linear polynomial is irreducible.
        return true;
    }

    // Dividend: full coefficient vector including the leading 1.
    let mut dividend = coeffs.to_vec();
    dividend.push(1);

    for d in 1..=(n / 2) {
        // Enumerate all monic divisors of degree d: p^d low-order
        // coefficient combinations.
        let count = p.pow(d as u32);
        for packed in 0..count {
            let mut divisor = vec![0u32; d + 1];
            let mut v = packed;
            for c in divisor.iter_mut().take(d) {
                *c = v % p;
                v /= p;
            }
            divisor[d] = 1;

            if divides(p, &dividend, &divisor) {
                return false;
            }
        }
    }

    true
}

/// Test whether `divisor` divides `dividend` over GF(p) (both monic).
fn divides(p: u32, dividend: &[u32], divisor: &[u32]) -> bool {
    let mut rem = dividend.to_vec();
    let d = divisor.len() - 1;

    while rem.len() > d {
        let lead = rem[rem.len() - 1];
        if lead != 0 {
            let shift = rem.len() - 1 - d;
            for (i, &c) in divisor.iter().enumerate() {
                let sub = (lead * c) % p;
                rem[shift + i] = (rem[shift + i] + p - sub) % p;
            }
        }
        rem.pop();
    }

    rem.iter().all(|&c| c == 0)
}
