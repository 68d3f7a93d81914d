//! Sparse bivariate polynomials over Galois fields.
//!
//! A [`BivariatePolynomial`] maps `(x_degree, y_degree)` pairs to non-zero
//! coefficients; an absent key is an implicit zero and setting a coefficient
//! to zero removes its entry. Interpolation tracks these polynomials term by
//! term and factorization repeatedly rewrites them, so the representation is
//! a sorted map rather than a dense grid.
//!
//! ## Example
//!
//! ```
//! use listdecode::gf::GaloisField;
//! use listdecode::poly::BivariatePolynomial;
//!
//! let gf5 = GaloisField::new(5).unwrap();
//! let mut q = BivariatePolynomial::new(&gf5);
//! q.set_coefficient(1, 0, &gf5.element(2)); // 2x
//! q.set_coefficient(0, 1, &gf5.element(3)); // 3y
//!
//! let value = q.evaluate(&gf5.element(1), &gf5.element(1));
//! assert_eq!(value.value(), 0); // 2 + 3 mod 5
//! ```

use std::collections::BTreeMap;
use std::fmt;

use super::binomial::BinomialTable;
use super::Polynomial;
use crate::gf::{FieldElement, GaloisField};

/// A sparse bivariate polynomial over a Galois field.
///
/// Invariant: no stored coefficient is zero, and the cached maximal degrees
/// match the stored keys. `is_zero` holds exactly when the map is empty.
#[derive(Clone)]
pub struct BivariatePolynomial {
    field: GaloisField,
    coeffs: BTreeMap<(usize, usize), u32>,
    max_x: usize,
    max_y: usize,
}

impl BivariatePolynomial {
    /// Create the zero polynomial.
    #[must_use]
    pub fn new(field: &GaloisField) -> Self {
        Self {
            field: field.clone(),
            coeffs: BTreeMap::new(),
            max_x: 0,
            max_y: 0,
        }
    }

    /// Create a single monomial `value * x^dx * y^dy`.
    ///
    /// # Panics
    ///
    /// Panics if `value` belongs to a different field.
    #[must_use]
    pub fn monomial(field: &GaloisField, dx: usize, dy: usize, value: &FieldElement) -> Self {
        let mut poly = Self::new(field);
        poly.set_coefficient(dx, dy, value);
        poly
    }

    /// Lift a univariate polynomial into the x variable.
    #[must_use]
    pub fn from_univariate_x(p: &Polynomial) -> Self {
        let mut poly = Self::new(p.field());
        for (i, &c) in p.coefficients().iter().enumerate() {
            poly.set_raw(i, 0, c);
        }
        poly
    }

    /// Get the coefficient field.
    #[must_use]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Check if this is the zero polynomial (no stored terms).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The largest x-degree among stored terms (0 for the zero polynomial).
    #[must_use]
    pub fn max_x_degree(&self) -> usize {
        self.max_x
    }

    /// The largest y-degree among stored terms (0 for the zero polynomial).
    #[must_use]
    pub fn max_y_degree(&self) -> usize {
        self.max_y
    }

    /// Number of stored (non-zero) terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.coeffs.len()
    }

    /// Get the coefficient of `x^dx * y^dy` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, dx: usize, dy: usize) -> FieldElement {
        self.field
            .element(self.coeffs.get(&(dx, dy)).copied().unwrap_or(0))
    }

    /// Set the coefficient of `x^dx * y^dy`.
    ///
    /// Setting a coefficient to zero removes the stored entry.
    ///
    /// # Panics
    ///
    /// Panics if `value` belongs to a different field.
    pub fn set_coefficient(&mut self, dx: usize, dy: usize, value: &FieldElement) {
        assert!(
            self.field == *value.field(),
            "coefficient from a different field"
        );
        self.set_raw(dx, dy, value.value());
    }

    /// Iterate over stored terms as `((x_degree, y_degree), coefficient)`.
    pub fn terms(&self) -> impl Iterator<Item = ((usize, usize), FieldElement)> + '_ {
        self.coeffs
            .iter()
            .map(|(&deg, &c)| (deg, self.field.element(c)))
    }

    /// Evaluate at a point by direct summation over the stored terms.
    ///
    /// # Panics
    ///
    /// Panics if either point belongs to a different field.
    #[must_use]
    pub fn evaluate(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        self.check_point(x);
        self.check_point(y);
        let tables = self.field.tables();
        let mut acc = 0u32;
        for (&(dx, dy), &c) in &self.coeffs {
            let term = tables.mul(
                c,
                tables.mul(
                    tables.pow(x.value(), dx as i64),
                    tables.pow(y.value(), dy as i64),
                ),
            );
            acc = tables.add(acc, term);
        }
        self.field.element(acc)
    }

    /// Partially evaluate at `x`, producing a univariate polynomial in y.
    ///
    /// # Panics
    ///
    /// Panics if `x` belongs to a different field.
    #[must_use]
    pub fn evaluate_x(&self, x: &FieldElement) -> Polynomial {
        self.check_point(x);
        let tables = self.field.tables();
        let mut coeffs = vec![0u32; self.max_y + 1];
        for (&(dx, dy), &c) in &self.coeffs {
            let term = tables.mul(c, tables.pow(x.value(), dx as i64));
            coeffs[dy] = tables.add(coeffs[dy], term);
        }
        Polynomial::new(&self.field, &coeffs).expect("coefficients are field elements")
    }

    /// Partially evaluate at `y`, producing a univariate polynomial in x.
    ///
    /// # Panics
    ///
    /// Panics if `y` belongs to a different field.
    #[must_use]
    pub fn evaluate_y(&self, y: &FieldElement) -> Polynomial {
        self.check_point(y);
        let tables = self.field.tables();
        let mut coeffs = vec![0u32; self.max_x + 1];
        for (&(dx, dy), &c) in &self.coeffs {
            let term = tables.mul(c, tables.pow(y.value(), dy as i64));
            coeffs[dx] = tables.add(coeffs[dx], term);
        }
        Polynomial::new(&self.field, &coeffs).expect("coefficients are field elements")
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    ///
    /// Panics if the scalar belongs to a different field.
    #[must_use]
    pub fn scale(&self, scalar: &FieldElement) -> Self {
        self.check_point(scalar);
        let tables = self.field.tables();
        let mut result = Self::new(&self.field);
        for (&(dx, dy), &c) in &self.coeffs {
            result.set_raw(dx, dy, tables.mul(c, scalar.value()));
        }
        result
    }

    /// Substitute both variables: compute `Q(x_sub, y_sub)`.
    ///
    /// The factorizer uses this with `x_sub = x`, `y_sub = c + x*y` to track
    /// coordinate changes. Powers of the substituted polynomials are cached
    /// for the duration of the call.
    ///
    /// # Panics
    ///
    /// Panics if either substitution belongs to a different field.
    #[must_use]
    pub fn substitute(&self, x_sub: &Self, y_sub: &Self) -> Self {
        assert!(
            self.field == x_sub.field && self.field == y_sub.field,
            "substitution over a different field"
        );

        let one = Self::monomial(&self.field, 0, 0, &self.field.one());
        let mut x_pows: Vec<Self> = vec![one.clone()];
        let mut y_pows: Vec<Self> = vec![one];

        let mut result = Self::new(&self.field);
        for (&(dx, dy), &c) in &self.coeffs {
            while x_pows.len() <= dx {
                let next = x_pows.last().expect("seeded with power 0") * x_sub;
                x_pows.push(next);
            }
            while y_pows.len() <= dy {
                let next = y_pows.last().expect("seeded with power 0") * y_sub;
                y_pows.push(next);
            }
            let term = (&x_pows[dx] * &y_pows[dy]).scale(&self.field.element(c));
            result = &result + &term;
        }
        result
    }

    /// Compute the Hasse derivative `D^(r,s) Q` evaluated at `(x, y)`.
    ///
    /// `D^(r,s) Q (x,y) = sum C(i,r) C(j,s) q_ij x^(i-r) y^(j-s)` over the
    /// stored terms with `i >= r`, `j >= s`, with binomial coefficients
    /// reduced modulo the field characteristic.
    ///
    /// # Panics
    ///
    /// Panics if either point belongs to a different field.
    #[must_use]
    pub fn hasse_derivative(
        &self,
        r: usize,
        s: usize,
        x: &FieldElement,
        y: &FieldElement,
    ) -> FieldElement {
        let mut binomials = BinomialTable::new(self.field.characteristic());
        self.hasse_derivative_cached(r, s, x, y, &mut binomials)
    }

    /// Hasse derivative with a caller-owned binomial cache, for hot loops
    /// that evaluate many derivative orders at once.
    pub(crate) fn hasse_derivative_cached(
        &self,
        r: usize,
        s: usize,
        x: &FieldElement,
        y: &FieldElement,
        binomials: &mut BinomialTable,
    ) -> FieldElement {
        self.check_point(x);
        self.check_point(y);
        let tables = self.field.tables();
        let mut acc = 0u32;
        for (&(dx, dy), &c) in &self.coeffs {
            if dx < r || dy < s {
                continue;
            }
            let factor = ((u64::from(binomials.get(dx, r)) * u64::from(binomials.get(dy, s)))
                % u64::from(self.field.characteristic())) as u32;
            if factor == 0 {
                continue;
            }
            let term = tables.mul(
                tables.mul(factor, c),
                tables.mul(
                    tables.pow(x.value(), (dx - r) as i64),
                    tables.pow(y.value(), (dy - s) as i64),
                ),
            );
            acc = tables.add(acc, term);
        }
        self.field.element(acc)
    }

    /// Divide out the maximal power of x common to every term.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn divide_by_max_x_power(&self) -> Self {
        let shift = match self.coeffs.keys().map(|&(dx, _)| dx).min() {
            Some(min_x) if min_x > 0 => min_x,
            _ => return self.clone(),
        };

        let mut result = Self::new(&self.field);
        for (&(dx, dy), &c) in &self.coeffs {
            result.set_raw(dx - shift, dy, c);
        }
        result
    }

    /// Check whether every stored term has y-degree at least 1, i.e.
    /// `Q(x, 0) = 0` as a polynomial identity.
    #[must_use]
    pub fn vanishes_at_zero_y(&self) -> bool {
        self.coeffs.keys().all(|&(_, dy)| dy >= 1)
    }

    pub(crate) fn set_raw(&mut self, dx: usize, dy: usize, value: u32) {
        if value == 0 {
            if self.coeffs.remove(&(dx, dy)).is_some() {
                self.recompute_max_degrees();
            }
        } else {
            self.coeffs.insert((dx, dy), value);
            self.max_x = self.max_x.max(dx);
            self.max_y = self.max_y.max(dy);
        }
    }

    pub(crate) fn add_raw(&mut self, dx: usize, dy: usize, value: u32) {
        let tables = self.field.tables();
        let current = self.coeffs.get(&(dx, dy)).copied().unwrap_or(0);
        let sum = tables.add(current, value);
        self.set_raw(dx, dy, sum);
    }

    fn recompute_max_degrees(&mut self) {
        self.max_x = self.coeffs.keys().map(|&(dx, _)| dx).max().unwrap_or(0);
        self.max_y = self.coeffs.keys().map(|&(_, dy)| dy).max().unwrap_or(0);
    }

    fn check_point(&self, e: &FieldElement) {
        assert!(
            self.field == *e.field(),
            "element from a different field: {} vs {}",
            self.field,
            e.field()
        );
    }

    fn check_field(&self, rhs: &Self) {
        assert!(
            self.field == rhs.field,
            "bivariate polynomials over different fields"
        );
    }

    fn add_impl(&self, rhs: &Self, subtract: bool) -> Self {
        self.check_field(rhs);
        let tables = self.field.tables();
        let mut result = self.clone();
        for (&(dx, dy), &c) in &rhs.coeffs {
            let value = if subtract { tables.neg(c) } else { c };
            result.add_raw(dx, dy, value);
        }
        result
    }

    fn mul_impl(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        let tables = self.field.tables();
        let mut result = Self::new(&self.field);
        for (&(ax, ay), &a) in &self.coeffs {
            for (&(bx, by), &b) in &rhs.coeffs {
                result.add_raw(ax + bx, ay + by, tables.mul(a, b));
            }
        }
        result
    }
}

impl PartialEq for BivariatePolynomial {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coeffs == other.coeffs
    }
}

impl Eq for BivariatePolynomial {}

impl fmt::Debug for BivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {}", self, self.field)
    }
}

impl fmt::Display for BivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (&(dx, dy), &c) in &self.coeffs {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if c != 1 || (dx == 0 && dy == 0) {
                write!(f, "{}", c)?;
            }
            match dx {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", dx)?,
            }
            match dy {
                0 => {}
                1 => write!(f, "y")?,
                _ => write!(f, "y^{}", dy)?,
            }
        }
        Ok(())
    }
}

impl std::ops::Add for &BivariatePolynomial {
    type Output = BivariatePolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs, false)
    }
}

impl std::ops::Sub for &BivariatePolynomial {
    type Output = BivariatePolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs, true)
    }
}

impl std::ops::Mul for &BivariatePolynomial {
    type Output = BivariatePolynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf5() -> GaloisField {
        GaloisField::new(5).unwrap()
    }

    /// 2x + 3y + xy^2 over GF(5).
    fn sample(field: &GaloisField) -> BivariatePolynomial {
        let mut q = BivariatePolynomial::new(field);
        q.set_coefficient(1, 0, &field.element(2));
        q.set_coefficient(0, 1, &field.element(3));
        q.set_coefficient(1, 2, &field.element(1));
        q
    }

    #[test]
    fn test_zero_coefficient_removes_entry() {
        let field = gf5();
        let mut q = BivariatePolynomial::new(&field);
        assert!(q.is_zero());

        q.set_coefficient(2, 3, &field.element(4));
        assert!(!q.is_zero());
        assert_eq!(q.term_count(), 1);
        assert_eq!(q.max_x_degree(), 2);
        assert_eq!(q.max_y_degree(), 3);

        q.set_coefficient(2, 3, &field.zero());
        assert!(q.is_zero());
        assert_eq!(q.term_count(), 0);
        assert_eq!(q.max_x_degree(), 0);
        assert_eq!(q.max_y_degree(), 0);
    }

    #[test]
    fn test_max_degrees_recomputed_on_removal() {
        let field = gf5();
        let mut q = BivariatePolynomial::new(&field);
        q.set_coefficient(1, 1, &field.element(1));
        q.set_coefficient(4, 2, &field.element(2));
        assert_eq!(q.max_x_degree(), 4);

        q.set_coefficient(4, 2, &field.zero());
        assert_eq!(q.max_x_degree(), 1);
        assert_eq!(q.max_y_degree(), 1);
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let field = gf5();
        let a = sample(&field);
        let mut b = BivariatePolynomial::new(&field);
        b.set_coefficient(1, 0, &field.element(3));
        b.set_coefficient(2, 2, &field.element(4));

        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn test_addition_cancels_terms() {
        let field = gf5();
        let mut a = BivariatePolynomial::new(&field);
        a.set_coefficient(1, 1, &field.element(2));
        let mut b = BivariatePolynomial::new(&field);
        b.set_coefficient(1, 1, &field.element(3));

        assert!((&a + &b).is_zero());
    }

    #[test]
    fn test_multiplication_matches_evaluation() {
        let field = gf5();
        let a = sample(&field);
        let mut b = BivariatePolynomial::new(&field);
        b.set_coefficient(0, 0, &field.element(2));
        b.set_coefficient(1, 1, &field.element(1));

        let product = &a * &b;
        for x in field.elements() {
            for y in field.elements() {
                let expected = a.evaluate(&x, &y).mul(&b.evaluate(&x, &y));
                assert_eq!(product.evaluate(&x, &y), expected);
            }
        }
    }

    #[test]
    fn test_partial_evaluation_consistency() {
        let field = gf5();
        let q = sample(&field);

        for x in field.elements() {
            for y in field.elements() {
                let direct = q.evaluate(&x, &y);
                assert_eq!(q.evaluate_x(&x).evaluate(&y), direct);
                assert_eq!(q.evaluate_y(&y).evaluate(&x), direct);
            }
        }
    }

    #[test]
    fn test_substitution() {
        let field = gf5();
        let q = sample(&field);

        // y -> c + x*y with c = 3; x unchanged.
        let x_sub = BivariatePolynomial::monomial(&field, 1, 0, &field.one());
        let mut y_sub = BivariatePolynomial::monomial(&field, 0, 0, &field.element(3));
        y_sub.set_coefficient(1, 1, &field.one());

        let substituted = q.substitute(&x_sub, &y_sub);
        for x in field.elements() {
            for y in field.elements() {
                let inner = field.element(3).add(&x.mul(&y));
                assert_eq!(substituted.evaluate(&x, &y), q.evaluate(&x, &inner));
            }
        }
    }

    #[test]
    fn test_hasse_derivative_is_partial_derivative_at_order_one() {
        let field = GaloisField::new(7).unwrap();
        // q = x^2 y + 3y^2: dq/dy = x^2 + 6y
        let mut q = BivariatePolynomial::new(&field);
        q.set_coefficient(2, 1, &field.one());
        q.set_coefficient(0, 2, &field.element(3));

        for x in field.elements() {
            for y in field.elements() {
                let expected = x.pow(2).add(&field.element(6).mul(&y));
                assert_eq!(q.hasse_derivative(0, 1, &x, &y), expected);
            }
        }
    }

    #[test]
    fn test_hasse_derivative_higher_order() {
        let field = gf5();
        // q = y^2: D^(0,1) q = C(2,1) y = 2y, D^(0,2) q = C(2,2) = 1
        let mut q = BivariatePolynomial::new(&field);
        q.set_coefficient(0, 2, &field.one());

        let x0 = field.element(2);
        let y0 = field.element(3);
        assert_eq!(q.hasse_derivative(0, 1, &x0, &y0).value(), 1); // 2*3 mod 5
        assert_eq!(q.hasse_derivative(0, 2, &x0, &y0).value(), 1);
        assert_eq!(q.hasse_derivative(0, 3, &x0, &y0).value(), 0);
    }

    #[test]
    fn test_hasse_derivative_order_zero_is_evaluation() {
        let field = gf5();
        let q = sample(&field);
        for x in field.elements() {
            for y in field.elements() {
                assert_eq!(q.hasse_derivative(0, 0, &x, &y), q.evaluate(&x, &y));
            }
        }
    }

    #[test]
    fn test_divide_by_max_x_power() {
        let field = gf5();
        let mut q = BivariatePolynomial::new(&field);
        q.set_coefficient(2, 0, &field.element(1));
        q.set_coefficient(3, 2, &field.element(4));

        let reduced = q.divide_by_max_x_power();
        assert_eq!(reduced.coefficient(0, 0).value(), 1);
        assert_eq!(reduced.coefficient(1, 2).value(), 4);
        assert_eq!(reduced.term_count(), 2);

        // No common power: unchanged.
        assert_eq!(reduced.divide_by_max_x_power(), reduced);
        // Zero polynomial: unchanged.
        let zero = BivariatePolynomial::new(&field);
        assert!(zero.divide_by_max_x_power().is_zero());
    }

    #[test]
    fn test_vanishes_at_zero_y() {
        let field = gf5();
        let mut q = BivariatePolynomial::new(&field);
        q.set_coefficient(2, 1, &field.element(1));
        q.set_coefficient(0, 3, &field.element(2));
        assert!(q.vanishes_at_zero_y());

        q.set_coefficient(1, 0, &field.element(1));
        assert!(!q.vanishes_at_zero_y());
    }

    #[test]
    fn test_from_univariate_x() {
        let field = gf5();
        let p = Polynomial::new(&field, &[1, 0, 2]).unwrap();
        let q = BivariatePolynomial::from_univariate_x(&p);

        assert_eq!(q.term_count(), 2);
        for x in field.elements() {
            assert_eq!(q.evaluate(&x, &field.zero()), p.evaluate(&x));
        }
    }

    #[test]
    fn test_display() {
        let field = gf5();
        let q = sample(&field);
        assert_eq!(format!("{}", q), "3y + 2x + xy^2");
    }
}
