//! Koetter's incremental interpolation algorithm.

use super::{validate_roots, InterpolationBuilder};
use crate::error::{Error, Result};
use crate::gf::FieldElement;
use crate::poly::{BinomialTable, BivariatePolynomial};

/// Builds the interpolation polynomial by Koetter's iterative algorithm.
///
/// One candidate polynomial is kept per admissible y-degree, initialized to
/// the monomials `1, y, y^2, ...`. Constraints are folded in one at a time:
/// the candidate with the smallest leading monomial among those violating
/// the current constraint is used to cancel the discrepancy in the others,
/// then repaired by multiplying with `(x - x_0)`. After all constraints the
/// minimal candidate is the answer.
///
/// Compared to [`DirectSolverBuilder`] this avoids materializing the
/// constraint matrix and keeps every intermediate polynomial minimal under
/// the weighted monomial order.
///
/// [`DirectSolverBuilder`]: super::DirectSolverBuilder
#[derive(Debug, Clone, Default)]
pub struct KotterBuilder {}

impl KotterBuilder {
    /// Create a new Koetter builder.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Leading monomial rank under the weighted order: compare by weighted
/// degree, break ties by y-degree.
fn leading_rank(q: &BivariatePolynomial, wx: usize, wy: usize) -> (usize, usize) {
    q.terms()
        .map(|((i, j), _)| (i * wx + j * wy, j))
        .max()
        .unwrap_or((0, 0))
}

impl InterpolationBuilder for KotterBuilder {
    fn build(
        &self,
        roots: &[(FieldElement, FieldElement)],
        multiplicity: usize,
        weights: (usize, usize),
        max_weighted_degree: usize,
    ) -> Result<BivariatePolynomial> {
        let field = validate_roots(roots, multiplicity)?;
        let (wx, wy) = weights;
        if wx == 0 || wy == 0 {
            return Err(Error::invalid_params("weights must be positive"));
        }

        let no_solution = Error::NoNontrivialPolynomial {
            max_weighted_degree,
            multiplicity,
            roots: roots.len(),
        };

        // One candidate per admissible y-degree.
        let max_y = max_weighted_degree / wy;
        let mut candidates: Vec<BivariatePolynomial> = (0..=max_y)
            .map(|j| BivariatePolynomial::monomial(&field, 0, j, &field.one()))
            .collect();

        let tables = field.tables();
        let mut binomials = BinomialTable::new(field.characteristic());

        for (x0, y0) in roots {
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    let discrepancies: Vec<u32> = candidates
                        .iter()
                        .map(|g| g.hasse_derivative_cached(r, s, x0, y0, &mut binomials).value())
                        .collect();

                    // Pick the minimal violating candidate.
                    let Some(pivot) = (0..candidates.len())
                        .filter(|&j| discrepancies[j] != 0)
                        .min_by_key(|&j| leading_rank(&candidates[j], wx, wy))
                    else {
                        continue;
                    };

                    let d_pivot = discrepancies[pivot];
                    for j in 0..candidates.len() {
                        if j == pivot || discrepancies[j] == 0 {
                            continue;
                        }
                        // g_j <- g_j - (d_j / d_pivot) * g_pivot
                        let factor = field.element(tables.div(discrepancies[j], d_pivot));
                        let correction = candidates[pivot].scale(&factor);
                        let reduced = &candidates[j] - &correction;
                        candidates[j] = reduced;
                    }

                    // g_pivot <- (x - x_0) * g_pivot
                    let mut x_minus_x0 =
                        BivariatePolynomial::monomial(&field, 1, 0, &field.one());
                    x_minus_x0.set_coefficient(0, 0, &x0.neg());
                    let bumped = &x_minus_x0 * &candidates[pivot];
                    candidates[pivot] = bumped;
                }
            }
        }

        let best = candidates
            .into_iter()
            .filter(|g| !g.is_zero())
            .min_by_key(|g| leading_rank(g, wx, wy))
            .ok_or_else(|| no_solution.clone())?;

        if leading_rank(&best, wx, wy).0 > max_weighted_degree {
            return Err(no_solution);
        }
        Ok(best)
    }
}
