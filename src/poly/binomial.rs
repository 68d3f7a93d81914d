//! Binomial coefficients modulo a prime characteristic.
//!
//! Hasse derivatives need `C(n, k) mod p` as field elements. The table
//! grows Pascal's triangle row by row on demand and caches it; each
//! computation owns its table, so nothing is shared across concurrent
//! calls.

/// A growable cache of Pascal's triangle rows modulo a prime.
///
/// # Example
///
/// ```
/// use listdecode::poly::BinomialTable;
///
/// let mut binomials = BinomialTable::new(5);
/// assert_eq!(binomials.get(4, 2), 1); // C(4,2) = 6 = 1 mod 5
/// assert_eq!(binomials.get(5, 1), 0); // C(5,1) = 5 = 0 mod 5
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTable {
    characteristic: u32,
    rows: Vec<Vec<u32>>,
}

impl BinomialTable {
    /// Create an empty table for the given prime characteristic.
    #[must_use]
    pub fn new(characteristic: u32) -> Self {
        Self {
            characteristic,
            rows: vec![vec![1]],
        }
    }

    /// Get the characteristic this table reduces by.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Compute `C(n, k) mod characteristic`, extending the cache as needed.
    #[must_use]
    pub fn get(&mut self, n: usize, k: usize) -> u32 {
        if k > n {
            return 0;
        }

        while self.rows.len() <= n {
            let prev = self.rows.last().expect("table seeded with row 0");
            let mut row = vec![1u32; prev.len() + 1];
            for i in 1..prev.len() {
                row[i] = (prev[i - 1] + prev[i]) % self.characteristic;
            }
            self.rows.push(row);
        }

        self.rows[n][k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let mut t = BinomialTable::new(7);
        assert_eq!(t.get(0, 0), 1);
        assert_eq!(t.get(4, 0), 1);
        assert_eq!(t.get(4, 4), 1);
        assert_eq!(t.get(4, 2), 6);
        assert_eq!(t.get(5, 2), 3); // 10 mod 7
        assert_eq!(t.get(2, 3), 0);
    }

    #[test]
    fn test_lucas_pattern_mod_2() {
        let mut t = BinomialTable::new(2);
        // C(n, k) mod 2 is 1 iff the bits of k are a subset of the bits of n.
        for n in 0..16usize {
            for k in 0..=n {
                let expected = u32::from(k & n == k);
                assert_eq!(t.get(n, k), expected, "C({}, {}) mod 2", n, k);
            }
        }
    }

    #[test]
    fn test_out_of_order_access() {
        let mut t = BinomialTable::new(19);
        assert_eq!(t.get(10, 5), 252 % 19);
        assert_eq!(t.get(3, 1), 3);
    }
}
