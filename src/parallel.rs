//! Parallel decoding built on `rayon`.
//!
//! Enabled with the `parallel` feature. Decoding is embarrassingly parallel
//! across received words; each word still runs the sequential
//! interpolation-factorization pipeline.

use rayon::prelude::*;

use crate::decoder::GsDecoder;
use crate::error::Result;
use crate::gf::FieldElement;
use crate::interpolation::InterpolationBuilder;
use crate::poly::Polynomial;

impl<B: InterpolationBuilder + Sync> GsDecoder<B> {
    /// Decode a batch of received words in parallel.
    ///
    /// Equivalent to calling [`decode`] on each word; results preserve the
    /// input order.
    ///
    /// [`decode`]: Self::decode
    pub fn par_decode(
        &self,
        k: usize,
        words: &[Vec<(FieldElement, FieldElement)>],
        min_correct: usize,
    ) -> Vec<Result<Vec<Polynomial>>> {
        words
            .par_iter()
            .map(|word| self.decode(k, word, min_correct))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::decoder::GsDecoder;
    use crate::gf::GaloisField;
    use crate::poly::Polynomial;

    #[test]
    fn test_par_decode_matches_sequential() {
        let field = GaloisField::new(8).unwrap();
        let decoder = GsDecoder::new();

        let words: Vec<Vec<_>> = (1..5u32)
            .map(|b| {
                let p = Polynomial::new(&field, &[b, 3]).unwrap();
                let mut word: Vec<_> = field
                    .elements()
                    .take(7)
                    .map(|x| {
                        let y = p.evaluate(&x);
                        (x, y)
                    })
                    .collect();
                word[2].1 = field.element(b ^ 1);
                word
            })
            .collect();

        let parallel = decoder.par_decode(2, &words, 5);
        for (word, result) in words.iter().zip(parallel) {
            assert_eq!(result, decoder.decode(2, word, 5));
        }
    }
}
