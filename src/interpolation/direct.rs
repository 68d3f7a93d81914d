//! Interpolation by direct linear-system solving.

use ndarray::{Array1, Array2};

use super::{validate_roots, InterpolationBuilder};
use crate::error::{Error, Result};
use crate::gf::FieldElement;
use crate::linalg::{solve, SystemSolution};
use crate::poly::{BinomialTable, BivariatePolynomial};

/// Builds the interpolation polynomial by solving one homogeneous linear
/// system over the field.
///
/// Each monomial `x^i y^j` inside the weighted-degree budget becomes an
/// unknown, each Hasse derivative constraint a row, and any null-space
/// vector of the resulting matrix is a valid interpolation polynomial. The
/// matrix is dense in the number of admissible monomials, so this builder
/// suits small problems and serves as a reference for [`KotterBuilder`].
///
/// [`KotterBuilder`]: super::KotterBuilder
#[derive(Debug, Clone, Default)]
pub struct DirectSolverBuilder {}

impl DirectSolverBuilder {
    /// Create a new direct-solver builder.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl InterpolationBuilder for DirectSolverBuilder {
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

        // Unknowns: one per monomial x^i y^j with i*wx + j*wy <= budget.
        let mut monomials = Vec::new();
        for j in 0..=max_weighted_degree / wy {
            for i in 0..=(max_weighted_degree - j * wy) / wx {
                monomials.push((i, j));
            }
        }

        let constraints_per_root = multiplicity * (multiplicity + 1) / 2;
        let rows = roots.len() * constraints_per_root;
        let tables = field.tables();
        let mut binomials = BinomialTable::new(field.characteristic());

        let mut a = Array2::<u32>::zeros((rows, monomials.len()));
        let mut row = 0usize;
        for (x, y) in roots {
            for r in 0..multiplicity {
                for s in 0..multiplicity - r {
                    for (col, &(i, j)) in monomials.iter().enumerate() {
                        if i < r || j < s {
                            continue;
                        }
                        let factor = ((u64::from(binomials.get(i, r))
                            * u64::from(binomials.get(j, s)))
                            % u64::from(field.characteristic())) as u32;
                        if factor == 0 {
                            continue;
                        }
                        a[[row, col]] = tables.mul(
                            factor,
                            tables.mul(
                                tables.pow(x.value(), (i - r) as i64),
                                tables.pow(y.value(), (j - s) as i64),
                            ),
                        );
                    }
                    row += 1;
                }
            }
        }

        let b = Array1::<u32>::zeros(rows);
        match solve(&field, &a, &b)? {
            SystemSolution::Infinite(basis) => {
                let coeffs = basis.into_iter().next().expect("non-empty basis");
                let mut q = BivariatePolynomial::new(&field);
                for (col, &(i, j)) in monomials.iter().enumerate() {
                    q.set_raw(i, j, coeffs[col]);
                }
                Ok(q)
            }
            // A homogeneous system only ever yields the zero vector here.
            SystemSolution::One(_) | SystemSolution::Empty => Err(Error::NoNontrivialPolynomial {
                max_weighted_degree,
                multiplicity,
                roots: roots.len(),
            }),
        }
    }
}
