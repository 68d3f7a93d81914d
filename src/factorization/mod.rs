//! Roth-Ruckenstein factorization of bivariate polynomials.
//!
//! Finds every univariate polynomial `p(x)` of bounded degree such that
//! `y - p(x)` divides a bivariate polynomial `Q(x, y)`. The algorithm
//! discovers the coefficients of `p` one at a time: the candidate constant
//! terms are the roots of `Q(0, y)`, and each root `c` induces the shifted
//! problem `Q(x, c + x*y)` with the maximal common power of x divided out,
//! whose y-roots are the next coefficient.
//!
//! The decoder uses this to read candidate information polynomials off the
//! interpolation polynomial.

use crate::gf::{FieldElement, GaloisField};
use crate::poly::{BivariatePolynomial, Polynomial};

/// Find all `p(x)` with `deg p <= max_degree` such that `y - p(x)` divides `q`.
///
/// The zero polynomial divides nothing and yields an empty list. Results
/// carry no duplicates and appear in discovery order.
#[must_use]
pub fn factorize(q: &BivariatePolynomial, max_degree: usize) -> Vec<Polynomial> {
    if q.is_zero() {
        return Vec::new();
    }

    let field = q.field().clone();
    let mut found = Vec::new();
    let mut prefix = Vec::new();
    descend(q, &field, max_degree, &mut prefix, &mut found);
    found
}

/// Explore one node of the coefficient tree.
///
/// `prefix` holds the coefficients fixed so far; `q` is the original
/// polynomial rewritten so that its y-roots at x = 0 are candidates for the
/// next coefficient.
fn descend(
    q: &BivariatePolynomial,
    field: &GaloisField,
    max_degree: usize,
    prefix: &mut Vec<u32>,
    found: &mut Vec<Polynomial>,
) {
    // y | Q means the prefix already is a full y-root of Q.
    if q.vanishes_at_zero_y() {
        let p = Polynomial::new(field, prefix).expect("prefix holds field elements");
        if !found.contains(&p) {
            found.push(p);
        }
    }
    if prefix.len() > max_degree {
        return;
    }

    for c in roots_at_zero_x(q, field) {
        // Q(x, c + x*y), with common x-powers removed to keep it primitive.
        let x_sub = BivariatePolynomial::monomial(field, 1, 0, &field.one());
        let mut y_sub = BivariatePolynomial::monomial(field, 1, 1, &field.one());
        y_sub.set_coefficient(0, 0, &c);

        let shifted = q.substitute(&x_sub, &y_sub).divide_by_max_x_power();
        if shifted.is_zero() {
            continue;
        }

        prefix.push(c.value());
        descend(&shifted, field, max_degree, prefix, found);
        prefix.pop();
    }
}

/// Roots of the univariate polynomial `Q(0, y)`, by exhaustive search.
fn roots_at_zero_x(q: &BivariatePolynomial, field: &GaloisField) -> Vec<FieldElement> {
    let at_zero = q.evaluate_x(&field.zero());
    if at_zero.is_zero() {
        // Every constant works; the shifted problems prune the tree.
        return field.elements().collect();
    }
    field
        .elements()
        .filter(|c| at_zero.evaluate(c).is_zero())
        .collect()
}
