//! Error types for the listdecode library.
//!
//! This module provides comprehensive error handling using the `thiserror` crate,
//! with specific error variants for Galois field construction, polynomial
//! operations, linear-system solving, interpolation, and decoding.
//!
//! Two kinds of failure are deliberately kept apart:
//! - construction/domain errors (invalid field order, coefficient out of
//!   range, dimension mismatch) signal a contract violation by the caller;
//! - "not found" conditions ([`Error::NoNontrivialPolynomial`]) are expected,
//!   recoverable outcomes that callers handle by retrying with different
//!   parameters.

use thiserror::Error;

/// The main error type for the listdecode library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Galois Field Errors ============
    /// The specified order is not a prime power.
    #[error("order {0} is not a prime power (must be p^k for prime p and k >= 1)")]
    NotPrimePower(u32),

    /// Attempted division by zero in a Galois field.
    #[error("division by zero in GF({order})")]
    DivisionByZero {
        /// The order of the field where division by zero occurred.
        order: u32,
    },

    /// Element value is out of range for the specified field.
    #[error("element {value} is out of range for GF({order}), must be in 0..{order}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The order of the field.
        order: u32,
    },

    /// No irreducible polynomial is known for the specified field order.
    #[error("no irreducible polynomial available for GF({0})")]
    NoIrreduciblePolynomial(u32),

    /// The supplied polynomial is not irreducible over the prime subfield.
    #[error("polynomial is not irreducible of degree {degree} over GF({characteristic})")]
    NotIrreducible {
        /// The prime characteristic of the subfield.
        characteristic: u32,
        /// The required degree of the irreducible polynomial.
        degree: u32,
    },

    /// No generator of the multiplicative group was found.
    ///
    /// Every finite field has a cyclic multiplicative group, so a
    /// construction over a valid irreducible polynomial always finds one.
    #[error("no generator found for the multiplicative group of GF({order})")]
    NoGeneratorFound {
        /// The order of the field.
        order: u32,
    },

    // ============ Polynomial Errors ============
    /// Attempted division by the zero polynomial.
    #[error("division by the zero polynomial over GF({order})")]
    ZeroPolynomialDivision {
        /// The order of the coefficient field.
        order: u32,
    },

    // ============ Linear System Errors ============
    /// Matrix and vector dimensions are inconsistent.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },

    // ============ Interpolation Errors ============
    /// No non-trivial polynomial satisfies the interpolation constraints
    /// within the weighted-degree budget.
    ///
    /// This is an expected outcome, not a contract violation: callers retry
    /// with a larger budget or multiplicity.
    #[error(
        "no non-trivial polynomial of weighted degree <= {max_weighted_degree} \
         vanishes with multiplicity {multiplicity} at all {roots} roots"
    )]
    NoNontrivialPolynomial {
        /// The weighted-degree budget that was exhausted.
        max_weighted_degree: usize,
        /// The required vanishing multiplicity.
        multiplicity: usize,
        /// The number of interpolation roots.
        roots: usize,
    },

    // ============ Decoder Errors ============
    /// The agreement threshold is too low for Guruswami-Sudan decoding.
    ///
    /// The decoder requires `t^2 > n * (k - 1)` to guarantee that every
    /// information polynomial with at least `t` agreements is found.
    #[error(
        "agreement threshold {min_correct} is too low for an ({n}, {k}) code: \
         requires min_correct^2 > n * (k - 1)"
    )]
    AgreementTooLow {
        /// The code length.
        n: usize,
        /// The code dimension.
        k: usize,
        /// The requested agreement threshold.
        min_correct: usize,
    },

    // ============ Parameter Validation Errors ============
    /// Invalid parameters.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },
}

/// A specialized `Result` type for listdecode operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}
