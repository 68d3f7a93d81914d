//! Polynomial rings over Galois fields.
//!
//! ## Overview
//!
//! - [`Polynomial`]: univariate polynomials as dense coefficient vectors
//! - [`BivariatePolynomial`]: sparse bivariate polynomials keyed by bidegree
//! - [`BinomialTable`]: binomial coefficients modulo the field characteristic
//!
//! ## Example
//!
//! ```
//! use listdecode::gf::GaloisField;
//! use listdecode::poly::Polynomial;
//!
//! let gf5 = GaloisField::new(5).unwrap();
//! let p = Polynomial::new(&gf5, &[1, 2]).unwrap(); // 1 + 2x
//! let q = Polynomial::new(&gf5, &[0, 3]).unwrap(); // 3x
//!
//! let product = &p * &q; // 3x + 6x^2 = 3x + x^2
//! assert_eq!(product, Polynomial::new(&gf5, &[0, 3, 1]).unwrap());
//! assert_eq!(product.evaluate(&gf5.element(2)).value(), 0); // 6 + 4 mod 5
//! ```

mod binomial;
pub mod bivariate;

pub use binomial::BinomialTable;
pub use bivariate::BivariatePolynomial;

use std::fmt;

use crate::error::{Error, Result};
use crate::gf::{FieldElement, GaloisField};

/// A univariate polynomial over a Galois field.
///
/// Coefficients are stored low-order first (`coeffs[i]` is the coefficient
/// of `x^i`) with trailing zeros stripped; the zero polynomial is the single
/// coefficient `[0]`. Binary operators allocate a new polynomial and require
/// both operands to share one field.
#[derive(Clone)]
pub struct Polynomial {
    field: GaloisField,
    coeffs: Vec<u32>,
}

impl Polynomial {
    /// Create a polynomial from coefficient representations, low-order first.
    ///
    /// Trailing zero coefficients are stripped; an empty slice yields the
    /// zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if any coefficient is not a
    /// valid element of the field.
    pub fn new(field: &GaloisField, coeffs: &[u32]) -> Result<Self> {
        for &c in coeffs {
            if !field.is_element(c) {
                return Err(Error::ElementOutOfRange {
                    value: c,
                    order: field.order(),
                });
            }
        }

        let mut poly = Self {
            field: field.clone(),
            coeffs: coeffs.to_vec(),
        };
        poly.truncate_leading_zeros();
        Ok(poly)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(field: &GaloisField) -> Self {
        Self {
            field: field.clone(),
            coeffs: vec![0],
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(field: &GaloisField) -> Self {
        Self {
            field: field.clone(),
            coeffs: vec![1],
        }
    }

    /// A single monomial `coefficient * x^degree`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient is out of range for the field.
    pub fn monomial(field: &GaloisField, coefficient: u32, degree: usize) -> Result<Self> {
        let mut coeffs = vec![0u32; degree + 1];
        coeffs[degree] = coefficient;
        Self::new(field, &coeffs)
    }

    /// Get the coefficient field.
    #[must_use]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Get the degree (the zero polynomial has degree 0).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Check if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Get the raw coefficient representations, low-order first.
    #[must_use]
    pub fn coefficients(&self) -> &[u32] {
        &self.coeffs
    }

    /// Get the coefficient of `x^i` as a field element (zero beyond the
    /// degree).
    #[must_use]
    pub fn coefficient(&self, i: usize) -> FieldElement {
        self.field.element(self.coeffs.get(i).copied().unwrap_or(0))
    }

    /// Evaluate at a point using Horner's rule.
    ///
    /// # Panics
    ///
    /// Panics if `point` belongs to a different field.
    #[must_use]
    pub fn evaluate(&self, point: &FieldElement) -> FieldElement {
        assert!(
            self.field == *point.field(),
            "evaluation point from a different field"
        );
        let tables = self.field.tables();
        let mut acc = 0u32;
        for &c in self.coeffs.iter().rev() {
            acc = tables.add(tables.mul(acc, point.value()), c);
        }
        self.field.element(acc)
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    ///
    /// Panics if the scalar belongs to a different field.
    #[must_use]
    pub fn scale(&self, scalar: &FieldElement) -> Self {
        assert!(
            self.field == *scalar.field(),
            "scalar from a different field"
        );
        let tables = self.field.tables();
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| tables.mul(c, scalar.value()))
            .collect();
        let mut result = Self {
            field: self.field.clone(),
            coeffs,
        };
        result.truncate_leading_zeros();
        result
    }

    /// Multiply by `x^k`, shifting every coefficient up by `k` degrees.
    #[must_use]
    pub fn right_shift(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut coeffs = vec![0u32; k];
        coeffs.extend_from_slice(&self.coeffs);
        Self {
            field: self.field.clone(),
            coeffs,
        }
    }

    /// Substitute `x -> x^d`, spreading the coefficients out.
    ///
    /// Used to build polyphase decompositions `p(x) = p_e(x^2) + x*p_o(x^2)`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    #[must_use]
    pub fn raise_variable_degree(&self, d: usize) -> Self {
        assert!(d >= 1, "variable degree multiplier must be at least 1");
        if d == 1 || self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![0u32; self.degree() * d + 1];
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs[i * d] = c;
        }
        Self {
            field: self.field.clone(),
            coeffs,
        }
    }

    /// Split into even/odd polyphase components:
    /// `p(x) = even(x^2) + x * odd(x^2)`.
    #[must_use]
    pub fn polyphase_components(&self) -> (Self, Self) {
        let even: Vec<u32> = self.coeffs.iter().copied().step_by(2).collect();
        let odd: Vec<u32> = self.coeffs.iter().copied().skip(1).step_by(2).collect();

        let make = |coeffs: Vec<u32>| {
            let mut p = Self {
                field: self.field.clone(),
                coeffs: if coeffs.is_empty() { vec![0] } else { coeffs },
            };
            p.truncate_leading_zeros();
            p
        };
        (make(even), make(odd))
    }

    /// Reassemble a polynomial from its polyphase components.
    ///
    /// Inverse of [`Self::polyphase_components`].
    ///
    /// # Panics
    ///
    /// Panics if the components come from different fields.
    #[must_use]
    pub fn from_polyphase_components(even: &Self, odd: &Self) -> Self {
        even.check_field(odd);
        let even_part = even.raise_variable_degree(2);
        let odd_part = odd.raise_variable_degree(2).right_shift(1);
        &even_part + &odd_part
    }

    /// Schoolbook long division.
    ///
    /// Returns `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and
    /// `deg(remainder) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroPolynomialDivision`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.check_field(divisor);
        if divisor.is_zero() {
            return Err(Error::ZeroPolynomialDivision {
                order: self.field.order(),
            });
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let n = self.coeffs.len();
        let d = divisor.coeffs.len();
        if n < d {
            return (Self::zero(&self.field), self.clone());
        }

        let tables = self.field.tables();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![0u32; n - d + 1];
        let lead_inv = tables.inv(divisor.coeffs[d - 1]);

        for shift in (0..=n - d).rev() {
            let coef = rem[shift + d - 1];
            if coef == 0 {
                continue;
            }
            let q = tables.mul(coef, lead_inv);
            quot[shift] = q;
            for (i, &dc) in divisor.coeffs.iter().enumerate() {
                rem[shift + i] = tables.sub(rem[shift + i], tables.mul(q, dc));
            }
        }

        rem.truncate(d - 1);

        let mut quotient = Self {
            field: self.field.clone(),
            coeffs: quot,
        };
        quotient.truncate_leading_zeros();
        let mut remainder = Self {
            field: self.field.clone(),
            coeffs: if rem.is_empty() { vec![0] } else { rem },
        };
        remainder.truncate_leading_zeros();
        (quotient, remainder)
    }

    /// Re-establish the no-trailing-zeros invariant after a mutation.
    fn truncate_leading_zeros(&mut self) {
        while self.coeffs.len() > 1 && *self.coeffs.last().unwrap() == 0 {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
    }

    fn check_field(&self, rhs: &Self) {
        assert!(
            self.field == rhs.field,
            "polynomials over different fields: {} and {}",
            self.field,
            rhs.field
        );
    }

    fn add_impl(&self, rhs: &Self, subtract: bool) -> Self {
        self.check_field(rhs);
        let tables = self.field.tables();
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = vec![0u32; len];
        for (i, c) in coeffs.iter_mut().enumerate() {
            let a = self.coeffs.get(i).copied().unwrap_or(0);
            let b = rhs.coeffs.get(i).copied().unwrap_or(0);
            *c = if subtract {
                tables.sub(a, b)
            } else {
                tables.add(a, b)
            };
        }
        let mut result = Self {
            field: self.field.clone(),
            coeffs,
        };
        result.truncate_leading_zeros();
        result
    }

    fn mul_impl(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(&self.field);
        }
        let tables = self.field.tables();
        let mut coeffs = vec![0u32; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = tables.add(coeffs[i + j], tables.mul(a, b));
            }
        }
        let mut result = Self {
            field: self.field.clone(),
            coeffs,
        };
        result.truncate_leading_zeros();
        result
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coeffs == other.coeffs
    }
}

impl Eq for Polynomial {}

impl std::hash::Hash for Polynomial {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.coeffs.hash(state);
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {}", self, self.field)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{}", c)?,
                1 if c == 1 => write!(f, "x")?,
                1 => write!(f, "{}x", c)?,
                _ if c == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", c, i)?,
            }
        }
        Ok(())
    }
}

impl std::ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs, false)
    }
}

impl std::ops::Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(&rhs, false)
    }
}

impl std::ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs, true)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_impl(&rhs, true)
    }
}

impl std::ops::Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(&rhs)
    }
}

impl std::ops::Div for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial; use
    /// [`Polynomial::div_rem`] for a fallible variant.
    fn div(self, rhs: Self) -> Self::Output {
        self.check_field(rhs);
        assert!(!rhs.is_zero(), "division by the zero polynomial");
        self.div_rem_nonzero(rhs).0
    }
}

impl std::ops::Rem for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial; use
    /// [`Polynomial::div_rem`] for a fallible variant.
    fn rem(self, rhs: Self) -> Self::Output {
        self.check_field(rhs);
        assert!(!rhs.is_zero(), "division by the zero polynomial");
        self.div_rem_nonzero(rhs).1
    }
}

impl std::ops::Shr<usize> for &Polynomial {
    type Output = Polynomial;

    fn shr(self, k: usize) -> Self::Output {
        self.right_shift(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf5() -> GaloisField {
        GaloisField::new(5).unwrap()
    }

    #[test]
    fn test_construction_strips_trailing_zeros() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 0, 0]).unwrap();
        assert_eq!(p.coefficients(), &[1, 2]);
        assert_eq!(p.degree(), 1);

        let zero = Polynomial::new(&field, &[0, 0, 0]).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.coefficients(), &[0]);
        assert_eq!(Polynomial::new(&field, &[]).unwrap(), zero);
    }

    #[test]
    fn test_construction_validates_coefficients() {
        let field = gf5();
        assert_eq!(
            Polynomial::new(&field, &[1, 7]).unwrap_err(),
            Error::ElementOutOfRange { value: 7, order: 5 }
        );
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3]).unwrap();
        let q = Polynomial::new(&field, &[4, 0, 3, 1]).unwrap();

        assert_eq!(&(&p + &q) - &q, p);
        assert_eq!(&(&q + &p) - &p, q);
    }

    #[test]
    fn test_add_cancels_leading_terms() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3]).unwrap();
        let q = Polynomial::new(&field, &[0, 0, 2]).unwrap();

        // 3 + 2 = 0 mod 5: result must be truncated.
        let sum = &p + &q;
        assert_eq!(sum.degree(), 1);
        assert_eq!(sum.coefficients(), &[1, 2]);
    }

    #[test]
    fn test_multiplication() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 1]).unwrap(); // 1 + x
        let q = Polynomial::new(&field, &[4, 1]).unwrap(); // 4 + x

        // (1 + x)(4 + x) = 4 + 5x + x^2 = 4 + x^2
        assert_eq!(&p * &q, Polynomial::new(&field, &[4, 0, 1]).unwrap());
    }

    #[test]
    fn test_scale() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3]).unwrap();
        let scaled = p.scale(&field.element(2));
        assert_eq!(scaled.coefficients(), &[2, 4, 1]);
        assert!(p.scale(&field.zero()).is_zero());
    }

    #[test]
    fn test_div_rem() {
        let field = gf5();
        let p = Polynomial::new(&field, &[2, 0, 3, 1]).unwrap();
        let q = Polynomial::new(&field, &[1, 1]).unwrap();

        let (quot, rem) = p.div_rem(&q).unwrap();
        assert!(rem.degree() < q.degree() || rem.is_zero());
        assert_eq!(&(&quot * &q) + &rem, p);
    }

    #[test]
    fn test_product_divisible_by_factor() {
        let field = gf5();
        let p = Polynomial::new(&field, &[2, 0, 3, 1]).unwrap();
        let q = Polynomial::new(&field, &[1, 4, 2]).unwrap();

        let product = &p * &q;
        assert!((&product % &q).is_zero());
        assert!((&product % &p).is_zero());
        assert_eq!(&product / &q, p);
    }

    #[test]
    fn test_division_by_zero_polynomial() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2]).unwrap();
        let zero = Polynomial::zero(&field);
        assert_eq!(
            p.div_rem(&zero).unwrap_err(),
            Error::ZeroPolynomialDivision { order: 5 }
        );
    }

    #[test]
    fn test_right_shift() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2]).unwrap();

        assert_eq!(p.right_shift(0), p);
        assert_eq!(&p >> 0, p);
        assert_eq!(
            p.right_shift(2),
            Polynomial::new(&field, &[0, 0, 1, 2]).unwrap()
        );
        assert!(Polynomial::zero(&field).right_shift(3).is_zero());
    }

    #[test]
    fn test_evaluate() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3]).unwrap(); // 1 + 2x + 3x^2

        assert_eq!(p.evaluate(&field.element(0)).value(), 1);
        assert_eq!(p.evaluate(&field.element(1)).value(), 1); // 6 mod 5
        assert_eq!(p.evaluate(&field.element(2)).value(), 2); // 17 mod 5
    }

    #[test]
    fn test_raise_variable_degree() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3]).unwrap();
        let raised = p.raise_variable_degree(2);

        assert_eq!(raised.coefficients(), &[1, 0, 2, 0, 3]);
        assert_eq!(p.raise_variable_degree(1), p);

        // p(x^2) evaluated at a equals p(a^2)
        for a in field.elements() {
            assert_eq!(raised.evaluate(&a), p.evaluate(&a.pow(2)));
        }
    }

    #[test]
    fn test_polyphase_roundtrip() {
        let field = gf5();
        for coeffs in [
            vec![0u32],
            vec![3],
            vec![1, 2],
            vec![1, 2, 3, 4],
            vec![1, 0, 3, 0, 2],
            vec![0, 1, 0, 2, 0, 3],
        ] {
            let p = Polynomial::new(&field, &coeffs).unwrap();
            let (even, odd) = p.polyphase_components();
            assert_eq!(Polynomial::from_polyphase_components(&even, &odd), p);
        }
    }

    #[test]
    fn test_polyphase_components() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 2, 3, 4]).unwrap();
        let (even, odd) = p.polyphase_components();

        assert_eq!(even.coefficients(), &[1, 3]);
        assert_eq!(odd.coefficients(), &[2, 4]);
    }

    #[test]
    fn test_monomial() {
        let field = gf5();
        let m = Polynomial::monomial(&field, 3, 2).unwrap();
        assert_eq!(m.coefficients(), &[0, 0, 3]);
        assert!(Polynomial::monomial(&field, 9, 2).is_err());
    }

    #[test]
    #[should_panic(expected = "different fields")]
    fn test_mixed_field_panics() {
        let a = Polynomial::new(&gf5(), &[1, 2]).unwrap();
        let b = Polynomial::new(&GaloisField::new(7).unwrap(), &[1, 2]).unwrap();
        let _ = &a + &b;
    }

    #[test]
    fn test_display() {
        let field = gf5();
        assert_eq!(format!("{}", Polynomial::zero(&field)), "0");
        assert_eq!(
            format!("{}", Polynomial::new(&field, &[3, 1, 0, 2]).unwrap()),
            "3 + x + 2x^3"
        );
    }
}
