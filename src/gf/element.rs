//! Galois field handles and element types.
//!
//! [`GaloisField`] is a cheaply-clonable handle to a set of precomputed
//! discrete-log tables; [`FieldElement`] pairs an element value with the
//! field it belongs to. Binary operations on elements from different fields
//! are a contract violation and panic.

use std::fmt;
use std::sync::Arc;

use super::irreducible::is_irreducible;
use super::tables::{self, GfTables};
use crate::error::{Error, Result};
use crate::utils::factor_prime_power;

/// A finite field of prime or prime-power order.
///
/// The field holds discrete-log tables built once at construction; cloning
/// the handle is cheap and all clones share the same tables. Two fields
/// compare equal iff they have the same order and (for extension fields)
/// the same irreducible polynomial.
///
/// # Example
///
/// ```
/// use listdecode::gf::GaloisField;
///
/// let gf8 = GaloisField::new(8).unwrap();
/// let a = gf8.element(5);
/// let b = gf8.element(3);
///
/// assert_eq!((a.clone() + b.clone()).value(), 6); // XOR in GF(2^3)
/// assert_eq!((a.clone() * a.inv()).value(), 1);
/// assert!(GaloisField::new(6).is_err());
/// ```
#[derive(Clone)]
pub struct GaloisField {
    tables: Arc<GfTables>,
}

impl GaloisField {
    /// Create a field of the given order.
    ///
    /// Prime orders need no further data; prime-power orders use the
    /// built-in irreducible polynomial database.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not a prime power, or if no
    /// irreducible polynomial is available for an extension order.
    pub fn new(order: u32) -> Result<Self> {
        let tables = tables::for_order(order)?;
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Create an extension field from a caller-supplied irreducible
    /// polynomial.
    ///
    /// `irreducible` holds the low-order coefficients `[c_0, ..., c_{n-1}]`
    /// of a monic polynomial `x^n + c_{n-1}x^{n-1} + ... + c_0` over the
    /// prime subfield, where `order = p^n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not a prime power, the polynomial
    /// degree does not match the extension degree, or the polynomial is
    /// reducible.
    ///
    /// # Example
    ///
    /// ```
    /// use listdecode::gf::GaloisField;
    ///
    /// // GF(8) over x^3 + x^2 + 1 instead of the default x^3 + x + 1.
    /// let gf8 = GaloisField::with_irreducible(8, &[1, 0, 1]).unwrap();
    /// assert_eq!(gf8.order(), 8);
    ///
    /// // x^3 + x^2 + x + 1 = (x + 1)(x^2 + 1) is reducible over GF(2).
    /// assert!(GaloisField::with_irreducible(8, &[1, 1, 1]).is_err());
    /// ```
    pub fn with_irreducible(order: u32, irreducible: &[u32]) -> Result<Self> {
        let factorization = factor_prime_power(order).ok_or(Error::NotPrimePower(order))?;
        let p = factorization.prime;
        let n = factorization.exponent;

        if irreducible.len() != n as usize || !is_irreducible(p, irreducible) {
            return Err(Error::NotIrreducible {
                characteristic: p,
                degree: n,
            });
        }

        let tables = if n == 1 {
            GfTables::new_prime(p)?
        } else {
            GfTables::new_extension(p, n, irreducible)?
        };

        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Get the field order (number of elements).
    #[must_use]
    pub fn order(&self) -> u32 {
        self.tables.order()
    }

    /// Get the field characteristic (the prime p where q = p^n).
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.tables.characteristic()
    }

    /// Get the extension degree (n where q = p^n).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.degree()
    }

    /// Check whether a value is a valid element representation.
    #[must_use]
    pub fn is_element(&self, value: u32) -> bool {
        value < self.order()
    }

    /// Create a field element from its integer representation.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `[0, order)`. Use [`Self::try_element`]
    /// for a fallible variant.
    #[must_use]
    pub fn element(&self, value: u32) -> FieldElement {
        assert!(
            self.is_element(value),
            "{} is not an element of {}",
            value,
            self
        );
        FieldElement {
            value,
            field: self.clone(),
        }
    }

    /// Create a field element, checking the representation range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `value >= order`.
    pub fn try_element(&self, value: u32) -> Result<FieldElement> {
        if !self.is_element(value) {
            return Err(Error::ElementOutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(FieldElement {
            value,
            field: self.clone(),
        })
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> FieldElement {
        self.element(0)
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> FieldElement {
        self.element(1)
    }

    /// Iterate over all elements of the field.
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (0..self.order()).map(move |v| self.element(v))
    }

    /// Iterate over all non-zero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (1..self.order()).map(move |v| self.element(v))
    }

    /// Access the underlying tables for raw-representation arithmetic.
    #[must_use]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order() && self.tables.irreducible() == other.tables.irreducible()
    }
}

impl Eq for GaloisField {}

impl std::hash::Hash for GaloisField {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.order().hash(state);
        self.tables.irreducible().hash(state);
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() == 1 {
            write!(f, "GF({})", self.order())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.degree())
        }
    }
}

/// An element of a Galois field.
///
/// Holds the element value together with a handle to its field; arithmetic
/// goes through the field's precomputed tables. All binary operations
/// require both operands to come from equal fields.
#[derive(Clone)]
pub struct FieldElement {
    value: u32,
    field: GaloisField,
}

impl FieldElement {
    /// Get the integer representation of this element.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Additive inverse (-a).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            value: self.field.tables.neg(self.value),
            field: self.field.clone(),
        }
    }

    /// Multiplicative inverse (a^(-1)).
    ///
    /// # Panics
    ///
    /// Panics if called on zero.
    #[must_use]
    pub fn inv(&self) -> Self {
        assert!(!self.is_zero(), "cannot invert zero in {}", self.field);
        Self {
            value: self.field.tables.inv(self.value),
            field: self.field.clone(),
        }
    }

    /// Checked multiplicative inverse; `None` for zero.
    #[must_use]
    pub fn checked_inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inv())
        }
    }

    /// Field addition.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        Self {
            value: self.field.tables.add(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field subtraction.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        Self {
            value: self.field.tables.sub(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field multiplication.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        Self {
            value: self.field.tables.mul(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        self.check_field(rhs);
        assert!(!rhs.is_zero(), "division by zero in {}", self.field);
        Self {
            value: self.field.tables.div(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Checked field division; `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.check_field(rhs);
        if rhs.is_zero() {
            None
        } else {
            Some(self.div(rhs))
        }
    }

    /// Exponentiation via the discrete-log tables.
    ///
    /// Negative exponents invert; `a^0` is 1 for every `a`.
    ///
    /// # Panics
    ///
    /// Panics if called on zero with a negative exponent.
    #[must_use]
    pub fn pow(&self, exp: i64) -> Self {
        Self {
            value: self.field.tables.pow(self.value, exp),
            field: self.field.clone(),
        }
    }

    fn check_field(&self, rhs: &Self) {
        assert!(
            self.field == rhs.field,
            "elements from different fields: {} and {}",
            self.field,
            rhs.field
        );
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field == other.field
    }
}

impl Eq for FieldElement {}

impl std::hash::Hash for FieldElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.field.hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement::add(&self, &rhs)
    }
}

impl std::ops::Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement::add(self, rhs)
    }
}

impl std::ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement::sub(&self, &rhs)
    }
}

impl std::ops::Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement::sub(self, rhs)
    }
}

impl std::ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement::mul(&self, &rhs)
    }
}

impl std::ops::Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement::mul(self, rhs)
    }
}

impl std::ops::Div for FieldElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        FieldElement::div(&self, &rhs)
    }
}

impl std::ops::Div for &FieldElement {
    type Output = FieldElement;

    fn div(self, rhs: Self) -> Self::Output {
        FieldElement::div(self, rhs)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let gf7 = GaloisField::new(7).unwrap();
        assert_eq!(gf7.order(), 7);
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.degree(), 1);

        let gf8 = GaloisField::new(8).unwrap();
        assert_eq!(gf8.order(), 8);
        assert_eq!(gf8.characteristic(), 2);
        assert_eq!(gf8.degree(), 3);
    }

    #[test]
    fn test_invalid_order() {
        assert!(GaloisField::new(0).is_err());
        assert!(GaloisField::new(1).is_err());
        assert!(GaloisField::new(6).is_err());
        assert!(GaloisField::new(10).is_err());
    }

    #[test]
    fn test_custom_irreducible() {
        let default = GaloisField::new(8).unwrap();
        let custom = GaloisField::with_irreducible(8, &[1, 0, 1]).unwrap();

        // Same order, different structure constant: not interchangeable.
        assert_ne!(default, custom);

        // Reducible polynomial rejected.
        let err = GaloisField::with_irreducible(8, &[1, 1, 1]).unwrap_err();
        assert_eq!(
            err,
            Error::NotIrreducible {
                characteristic: 2,
                degree: 3
            }
        );

        // Wrong degree rejected.
        assert!(GaloisField::with_irreducible(8, &[1, 1]).is_err());
    }

    #[test]
    fn test_field_value_equality() {
        let a = GaloisField::new(19).unwrap();
        let b = GaloisField::new(19).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.element(7), b.element(7));
    }

    #[test]
    fn test_element_range() {
        let gf5 = GaloisField::new(5).unwrap();
        assert!(gf5.is_element(4));
        assert!(!gf5.is_element(5));
        assert!(gf5.try_element(4).is_ok());
        assert_eq!(
            gf5.try_element(5).unwrap_err(),
            Error::ElementOutOfRange { value: 5, order: 5 }
        );
    }

    #[test]
    fn test_element_arithmetic() {
        let gf7 = GaloisField::new(7).unwrap();
        let a = gf7.element(3);
        let b = gf7.element(5);

        assert_eq!(a.add(&b).value(), 1);
        assert_eq!(a.sub(&b).value(), 5);
        assert_eq!(a.mul(&b).value(), 1);
        assert_eq!(a.div(&b).value(), 2);
    }

    #[test]
    fn test_operators() {
        let gf5 = GaloisField::new(5).unwrap();
        let a = gf5.element(3);
        let b = gf5.element(2);

        assert_eq!((a.clone() + b.clone()).value(), 0);
        assert_eq!((a.clone() - b.clone()).value(), 1);
        assert_eq!((a.clone() * b.clone()).value(), 1);
        assert_eq!((a.clone() / b.clone()).value(), 4);
        assert_eq!((-a).value(), 2);
    }

    #[test]
    fn test_axioms() {
        let gf9 = GaloisField::new(9).unwrap();
        for a in gf9.elements() {
            for b in gf9.elements() {
                assert_eq!(a.add(&b), b.add(&a));
                assert_eq!(a.mul(&b), b.mul(&a));
            }
            assert_eq!(a.add(&gf9.zero()), a);
            assert_eq!(a.mul(&gf9.one()), a);
            assert_eq!(a.add(&a.neg()), gf9.zero());
            if !a.is_zero() {
                assert_eq!(a.mul(&a.inv()), gf9.one());
            }
        }
    }

    #[test]
    fn test_checked_operations() {
        let gf7 = GaloisField::new(7).unwrap();
        let a = gf7.element(3);
        let zero = gf7.zero();

        assert!(zero.checked_inv().is_none());
        assert!(a.checked_div(&zero).is_none());
        assert_eq!(a.checked_div(&a).unwrap(), gf7.one());
    }

    #[test]
    fn test_pow() {
        let gf8 = GaloisField::new(8).unwrap();
        let a = gf8.element(3);

        assert_eq!(a.pow(0), gf8.one());
        assert_eq!(a.pow(7), gf8.one()); // order of the unit group
        assert_eq!(a.pow(-1), a.inv());
        assert_eq!(a.pow(3).mul(&a.pow(-3)), gf8.one());
    }

    #[test]
    #[should_panic(expected = "different fields")]
    fn test_mismatched_fields_panic() {
        let gf5 = GaloisField::new(5).unwrap();
        let gf7 = GaloisField::new(7).unwrap();
        let _ = gf5.element(1).add(&gf7.element(1));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let gf5 = GaloisField::new(5).unwrap();
        let _ = gf5.element(3).div(&gf5.zero());
    }

    #[test]
    fn test_display() {
        let gf7 = GaloisField::new(7).unwrap();
        assert_eq!(format!("{}", gf7), "GF(7)");

        let gf9 = GaloisField::new(9).unwrap();
        assert_eq!(format!("{}", gf9), "GF(3^2)");
        assert_eq!(format!("{}", gf9.element(5)), "5");
    }
}
