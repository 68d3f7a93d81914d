//! Linear systems over Galois fields.
//!
//! Solves `A x = b` by Gauss-Jordan elimination to reduced row echelon
//! form and classifies the solution set. Interpolation reduces to a
//! homogeneous system whose null space holds the candidate polynomials,
//! so the under-determined case reports a basis rather than failing.
//!
//! ## Example
//!
//! ```
//! use ndarray::{array, Array1};
//! use listdecode::gf::GaloisField;
//! use listdecode::linalg::{solve, SystemSolution};
//!
//! let gf5 = GaloisField::new(5).unwrap();
//! let a = array![[1, 1], [1, 2]];
//! let b = array![3, 4];
//!
//! match solve(&gf5, &a, &b).unwrap() {
//!     SystemSolution::One(x) => assert_eq!(x, array![2, 1]),
//!     other => panic!("expected unique solution, got {:?}", other),
//! }
//! ```

use ndarray::{Array1, Array2};

use crate::error::{Error, Result};
use crate::gf::GaloisField;

/// The solution set of a linear system over a finite field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemSolution {
    /// The system is inconsistent.
    Empty,
    /// Exactly one solution vector.
    One(Array1<u32>),
    /// Infinitely many solutions, reported as a basis of the null space of
    /// the coefficient matrix. Each basis vector solves the homogeneous
    /// system `A v = 0`.
    Infinite(Vec<Array1<u32>>),
}

/// Solve `A x = b` over the given field.
///
/// Matrix and vector entries are field element values. Returns
/// [`Error::DimensionMismatch`] when `b` does not match the row count of
/// `A`, or [`Error::ElementOutOfRange`] when an entry is not an element of
/// the field.
pub fn solve(field: &GaloisField, a: &Array2<u32>, b: &Array1<u32>) -> Result<SystemSolution> {
    let (rows, cols) = a.dim();
    if b.len() != rows {
        return Err(Error::DimensionMismatch {
            expected: format!("right-hand side of length {rows}"),
            actual: format!("length {}", b.len()),
        });
    }
    for &v in a.iter().chain(b.iter()) {
        if !field.is_element(v) {
            return Err(Error::ElementOutOfRange {
                value: v,
                order: field.order(),
            });
        }
    }

    // Augmented matrix [A | b], reduced in place.
    let mut m = Array2::<u32>::zeros((rows, cols + 1));
    for i in 0..rows {
        for j in 0..cols {
            m[[i, j]] = a[[i, j]];
        }
        m[[i, cols]] = b[i];
    }

    let tables = field.tables();
    let mut pivot_cols = Vec::with_capacity(cols.min(rows));
    let mut pivot_row = 0usize;

    for col in 0..cols {
        let Some(src) = (pivot_row..rows).find(|&r| m[[r, col]] != 0) else {
            continue;
        };
        if src != pivot_row {
            for j in 0..=cols {
                m.swap([src, j], [pivot_row, j]);
            }
        }

        let inv = tables.inv(m[[pivot_row, col]]);
        for j in col..=cols {
            m[[pivot_row, j]] = tables.mul(m[[pivot_row, j]], inv);
        }

        for r in 0..rows {
            if r == pivot_row || m[[r, col]] == 0 {
                continue;
            }
            let factor = m[[r, col]];
            for j in col..=cols {
                let scaled = tables.mul(factor, m[[pivot_row, j]]);
                m[[r, j]] = tables.sub(m[[r, j]], scaled);
            }
        }

        pivot_cols.push(col);
        pivot_row += 1;
        if pivot_row == rows {
            break;
        }
    }

    // A zero row with a non-zero right-hand side means no solution.
    for r in pivot_row..rows {
        if m[[r, cols]] != 0 {
            return Ok(SystemSolution::Empty);
        }
    }

    if pivot_cols.len() == cols {
        let mut x = Array1::<u32>::zeros(cols);
        for (r, &col) in pivot_cols.iter().enumerate() {
            x[col] = m[[r, cols]];
        }
        return Ok(SystemSolution::One(x));
    }

    // Under-determined: one null-space basis vector per free column, with
    // the free variable set to 1 and pivot variables back-substituted.
    let mut is_pivot = vec![false; cols];
    for &col in &pivot_cols {
        is_pivot[col] = true;
    }
    let mut basis = Vec::with_capacity(cols - pivot_cols.len());
    for free in (0..cols).filter(|&c| !is_pivot[c]) {
        let mut v = Array1::<u32>::zeros(cols);
        v[free] = 1;
        for (r, &col) in pivot_cols.iter().enumerate() {
            v[col] = tables.neg(m[[r, free]]);
        }
        basis.push(v);
    }
    Ok(SystemSolution::Infinite(basis))
}
