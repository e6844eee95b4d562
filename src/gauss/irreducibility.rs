// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Irreducibility of a Gauss code.

use std::collections::HashSet;

use super::GaussCode;

impl GaussCode {
    /// Whether no substring of length `2n` consists of exactly `n` labels.
    ///
    /// Such a substring is a sub-loop whose points are all crossed twice
    /// within it, so the curve factors through it. The code is read
    /// linearly and the whole code counts as a substring. O(L²).
    pub fn is_irreducible(&self) -> bool {
        let n = self.labels.len();
        for start in 0..n {
            let mut seen = HashSet::new();
            for end in start..n {
                seen.insert(self.labels[end]);
                let len = end - start + 1;
                if len % 2 == 0 && 2 * seen.len() == len {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_pair_is_reducible() {
        assert!(!GaussCode::open(vec![1, 2, 1, 2]).is_irreducible());
    }

    #[test]
    fn test_inner_sub_loop_is_reducible() {
        // 2 3 2 3 sits inside.
        assert!(!GaussCode::open(vec![1, 2, 3, 2, 3, 4]).is_irreducible());
    }

    #[test]
    fn test_trefoil_prefix_is_irreducible() {
        assert!(GaussCode::open(vec![1, 2, 3]).is_irreducible());
        assert!(GaussCode::open(vec![1, 2, 3, 1, 2]).is_irreducible());
    }

    #[test]
    fn test_complete_code_counts_as_substring() {
        // Every point of a complete code is crossed twice.
        assert!(!GaussCode::open(vec![1, 2, 3, 1, 2, 3]).is_irreducible());
    }

    #[test]
    fn test_empty_code_is_irreducible() {
        assert!(GaussCode::new().is_irreducible());
    }
}
