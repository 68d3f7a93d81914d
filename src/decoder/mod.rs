//! Guruswami-Sudan list decoding.
//!
//! A [`GsDecoder`] recovers every polynomial `p` of degree below `k` that
//! agrees with a received word `(x_i, y_i)` in at least `min_correct`
//! positions, provided `min_correct^2 > n * (k - 1)`. This reaches beyond
//! half the minimum distance of the corresponding Reed-Solomon code: instead
//! of one closest codeword, the decoder returns the full (typically short)
//! list of plausible ones.
//!
//! The pipeline is interpolation then factorization: build a bivariate `Q`
//! vanishing with multiplicity `m` at every received point under a
//! `(1, k-1)`-weighted degree budget, then read the y-roots of `Q` off with
//! Roth-Ruckenstein and keep those with enough agreement.
//!
//! ## Example
//!
//! ```
//! use listdecode::decoder::GsDecoder;
//! use listdecode::gf::GaloisField;
//! use listdecode::poly::Polynomial;
//!
//! let gf8 = GaloisField::new(8).unwrap();
//! let message = Polynomial::new(&gf8, &[3, 2]).unwrap();
//!
//! // Encode at seven points, then corrupt two of them.
//! let mut word: Vec<_> = gf8
//!     .elements()
//!     .take(7)
//!     .map(|x| { let y = message.evaluate(&x); (x, y) })
//!     .collect();
//! word[0].1 = gf8.element(6);
//! word[3].1 = gf8.element(1);
//!
//! let decoder = GsDecoder::new();
//! let list = decoder.decode(2, &word, 5).unwrap();
//! assert!(list.contains(&message));
//! ```

use crate::error::{Error, Result};
use crate::factorization::factorize;
use crate::gf::FieldElement;
use crate::interpolation::{InterpolationBuilder, KotterBuilder};
use crate::poly::Polynomial;

/// Interpolation parameters derived from the code and agreement threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderParams {
    /// Vanishing multiplicity at each received point.
    pub multiplicity: usize,
    /// Weighted-degree budget for the interpolation polynomial.
    pub max_weighted_degree: usize,
}

/// A Guruswami-Sudan list decoder, generic over the interpolation strategy.
///
/// The default builder is [`KotterBuilder`]; [`with_builder`] swaps in any
/// other [`InterpolationBuilder`].
///
/// [`with_builder`]: Self::with_builder
#[derive(Debug, Clone, Default)]
pub struct GsDecoder<B = KotterBuilder> {
    builder: B,
}

impl GsDecoder<KotterBuilder> {
    /// Create a decoder using Koetter interpolation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: KotterBuilder::new(),
        }
    }
}

impl<B: InterpolationBuilder> GsDecoder<B> {
    /// Create a decoder with an explicit interpolation builder.
    #[must_use]
    pub fn with_builder(builder: B) -> Self {
        Self { builder }
    }

    /// Compute the multiplicity and weighted-degree budget for an `(n, k)`
    /// code at the given agreement threshold.
    ///
    /// The multiplicity is the smallest one for which every polynomial with
    /// `min_correct` agreements is guaranteed to divide the interpolation
    /// polynomial: `m = 1 + floor(n(k-1) / (t^2 - n(k-1)))` with budget
    /// `t*m - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AgreementTooLow`] unless
    /// `min_correct^2 > n * (k - 1)`.
    pub fn parameters(n: usize, k: usize, min_correct: usize) -> Result<DecoderParams> {
        let cost = n * (k - 1);
        if min_correct * min_correct <= cost {
            return Err(Error::AgreementTooLow { n, k, min_correct });
        }
        let multiplicity = 1 + cost / (min_correct * min_correct - cost);
        Ok(DecoderParams {
            multiplicity,
            max_weighted_degree: min_correct * multiplicity - 1,
        })
    }

    /// List-decode a received word.
    ///
    /// `word` holds the `(x_i, y_i)` pairs of the received word; the `x_i`
    /// must be distinct. Returns every polynomial of degree below `k` that
    /// matches the word in at least `min_correct` positions. An empty list
    /// means no codeword is that close.
    ///
    /// # Errors
    ///
    /// - [`Error::AgreementTooLow`] if `min_correct^2 <= n * (k - 1)`
    /// - [`Error::InvalidParams`] for `k < 2`, an empty or repeated-support
    ///   word, mixed fields, or `min_correct > n`
    pub fn decode(
        &self,
        k: usize,
        word: &[(FieldElement, FieldElement)],
        min_correct: usize,
    ) -> Result<Vec<Polynomial>> {
        if k < 2 {
            return Err(Error::invalid_params("code dimension must be at least 2"));
        }
        let n = word.len();
        if n == 0 {
            return Err(Error::invalid_params("received word is empty"));
        }
        if k > n {
            return Err(Error::invalid_params(
                "code dimension exceeds the word length",
            ));
        }
        if min_correct > n {
            return Err(Error::invalid_params(
                "agreement threshold exceeds the word length",
            ));
        }
        for (i, (xi, _)) in word.iter().enumerate() {
            if word[..i].iter().any(|(xj, _)| xj == xi) {
                return Err(Error::invalid_params(
                    "received word has a repeated evaluation point",
                ));
            }
        }

        let params = Self::parameters(n, k, min_correct)?;
        let q = match self.builder.build(
            word,
            params.multiplicity,
            (1, k - 1),
            params.max_weighted_degree,
        ) {
            Ok(q) => q,
            // No interpolation polynomial in budget means no codeword close
            // enough, not a failure.
            Err(Error::NoNontrivialPolynomial { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let candidates = factorize(&q, k - 1);
        Ok(candidates
            .into_iter()
            .filter(|p| agreement(p, word) >= min_correct)
            .collect())
    }
}

/// Number of positions where `p` matches the received word.
fn agreement(p: &Polynomial, word: &[(FieldElement, FieldElement)]) -> usize {
    word.iter().filter(|(x, y)| p.evaluate(x) == *y).count()
}
