//! # Listdecode
//!
//! An algebraic toolkit for list decoding of Reed-Solomon style codes,
//! built from first principles: Galois field arithmetic, polynomial rings,
//! linear algebra over finite fields, and the Guruswami-Sudan decoder.
//!
//! ## Overview
//!
//! List decoding returns every codeword within a given radius of a received
//! word rather than a single closest one, which lets a decoder correct
//! strictly more errors than half the minimum distance. This library
//! provides each layer of the construction as a reusable component:
//!
//! - Finite fields GF(p^n) with discrete-log table arithmetic
//! - Univariate and sparse bivariate polynomial rings
//! - Linear-system solving over any supported field
//! - Bivariate interpolation with multiplicities (direct and Koetter)
//! - Roth-Ruckenstein factorization into y-roots
//! - The Guruswami-Sudan list decoder tying the layers together
//!
//! ## Quick Start
//!
//! ```rust
//! use listdecode::decoder::GsDecoder;
//! use listdecode::gf::GaloisField;
//! use listdecode::poly::Polynomial;
//!
//! let gf19 = GaloisField::new(19).unwrap();
//! let message = Polynomial::new(&gf19, &[7, 0, 11]).unwrap();
//!
//! // Evaluate the message at ten points, then corrupt some of them.
//! let mut word: Vec<_> = gf19
//!     .elements()
//!     .take(10)
//!     .map(|x| { let y = message.evaluate(&x); (x, y) })
//!     .collect();
//! word[0].1 = gf19.element(1);
//! word[4].1 = gf19.element(2);
//!
//! let list = GsDecoder::new().decode(3, &word, 6).unwrap();
//! assert!(list.contains(&message));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization of field descriptions
//! - `parallel`: Enable batch decoding using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod decoder;
pub mod error;
pub mod factorization;
pub mod gf;
pub mod interpolation;
pub mod linalg;
pub mod poly;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::decoder::{DecoderParams, GsDecoder};
    pub use crate::error::{Error, Result};
    pub use crate::factorization::factorize;
    pub use crate::gf::{
        get_irreducible_poly, has_irreducible_poly, FieldElement, GaloisField,
    };
    pub use crate::interpolation::{
        weighted_degree, DirectSolverBuilder, InterpolationBuilder, KotterBuilder,
    };
    pub use crate::linalg::{solve, SystemSolution};
    pub use crate::poly::{BinomialTable, BivariatePolynomial, Polynomial};
    pub use crate::utils::{factor_prime_power, is_prime, is_prime_power};
}

// Re-export commonly used items at crate root
pub use decoder::GsDecoder;
pub use error::{Error, Result};
pub use gf::{FieldElement, GaloisField};
pub use poly::{BivariatePolynomial, Polynomial};
pub use utils::{is_prime, is_prime_power};
