//! Galois field (finite field) arithmetic.
//!
//! This module provides fields GF(q) for any prime power q that fits the
//! discrete-log table representation, together with the element value type
//! the rest of the library computes with.
//!
//! ## Overview
//!
//! - [`GaloisField`]: runtime-configured field handle with precomputed tables
//! - [`FieldElement`]: a `(field, value)` pair with full operator support
//! - [`GfTables`]: the underlying discrete-log/antilog table pair
//! - [`irreducible`]: irreducible polynomial database and irreducibility test
//!
//! ## Example
//!
//! ```
//! use listdecode::gf::GaloisField;
//!
//! let gf19 = GaloisField::new(19).unwrap();
//! let a = gf19.element(14);
//! let b = gf19.element(8);
//!
//! assert_eq!((a.clone() + b.clone()).value(), 3);  // 22 mod 19
//! assert_eq!((a * b).value(), 17);                 // 112 mod 19
//! ```

mod element;
pub mod irreducible;
mod tables;

pub use element::{FieldElement, GaloisField};
pub use irreducible::{get_irreducible_poly, has_irreducible_poly, is_irreducible};
pub use tables::GfTables;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_and_extension_agree_on_subfield() {
        // The prime subfield of GF(9) embeds GF(3) as the constant digits.
        let gf3 = GaloisField::new(3).unwrap();
        let gf9 = GaloisField::new(9).unwrap();

        for a in 0..3u32 {
            for b in 0..3u32 {
                let sum3 = gf3.element(a).add(&gf3.element(b)).value();
                let sum9 = gf9.element(a).add(&gf9.element(b)).value();
                assert_eq!(sum3, sum9);
            }
        }
    }

    #[test]
    fn test_multiplicative_group_is_cyclic() {
        for order in [5u32, 7, 8, 9, 16, 19, 25] {
            let field = GaloisField::new(order).unwrap();
            // log tables cover every unit exactly once
            let mut seen = vec![false; (order - 1) as usize];
            for u in field.units() {
                let l = field.tables().log(u.value()) as usize;
                assert!(!seen[l], "duplicate log in GF({})", order);
                seen[l] = true;
            }
        }
    }
}
