//! Bivariate interpolation with multiplicities.
//!
//! Given points `(x_i, y_i)`, a multiplicity `m`, and a weighted-degree
//! budget, an [`InterpolationBuilder`] produces a non-zero bivariate
//! polynomial whose Hasse derivatives `D^(r,s) Q (x_i, y_i)` vanish for all
//! `r + s < m`. Two interchangeable builders are provided:
//!
//! - [`DirectSolverBuilder`]: sets up the constraints as one homogeneous
//!   linear system and reads a null-space vector back as the polynomial.
//!   Simple, and a useful cross-check for the other builder.
//! - [`KotterBuilder`]: Koetter's incremental algorithm, which maintains a
//!   small set of candidates and folds in one constraint at a time. This is
//!   the builder the decoder uses by default.

mod direct;
mod kotter;

pub use direct::DirectSolverBuilder;
pub use kotter::KotterBuilder;

use crate::error::{Error, Result};
use crate::gf::{FieldElement, GaloisField};
use crate::poly::BivariatePolynomial;

/// Strategy for building an interpolation polynomial.
///
/// Implementations must return a non-zero polynomial satisfying every
/// derivative constraint with `(wx, wy)`-weighted degree at most
/// `max_weighted_degree`, or [`Error::NoNontrivialPolynomial`] when the
/// budget admits no such polynomial.
pub trait InterpolationBuilder {
    /// Build an interpolation polynomial through `roots`, each with the
    /// given `multiplicity`, under the weighted-degree budget.
    fn build(
        &self,
        roots: &[(FieldElement, FieldElement)],
        multiplicity: usize,
        weights: (usize, usize),
        max_weighted_degree: usize,
    ) -> Result<BivariatePolynomial>;
}

/// The `(wx, wy)`-weighted degree of a non-zero polynomial: the maximum of
/// `i * wx + j * wy` over its terms. Returns 0 for the zero polynomial.
#[must_use]
pub fn weighted_degree(q: &BivariatePolynomial, weights: (usize, usize)) -> usize {
    q.terms()
        .map(|((i, j), _)| i * weights.0 + j * weights.1)
        .max()
        .unwrap_or(0)
}

/// Validate a root list and return the common field.
pub(crate) fn validate_roots(
    roots: &[(FieldElement, FieldElement)],
    multiplicity: usize,
) -> Result<GaloisField> {
    if roots.is_empty() {
        return Err(Error::invalid_params("interpolation needs at least one root"));
    }
    if multiplicity == 0 {
        return Err(Error::invalid_params("multiplicity must be at least 1"));
    }
    let field = roots[0].0.field().clone();
    for (x, y) in roots {
        if *x.field() != field || *y.field() != field {
            return Err(Error::invalid_params(
                "interpolation roots must share one field",
            ));
        }
    }
    Ok(field)
}
