// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equivalence of Gauss codes up to rotation and relabelling.
//!
//! Two codes `G1`, `G2` of length `m` are equivalent when there is a shift
//! `k` and a bijection `f` with `G1[i] = f(G2[(i + k) mod m])` for every `i`.

use std::collections::HashMap;

use super::GaussCode;
use crate::geometry::PointLabel;

impl GaussCode {
    /// Whether `other` is this code up to rotation and relabelling.
    pub fn is_equivalent(&self, other: &[PointLabel]) -> bool {
        let m = self.labels.len();
        if m != other.len() {
            return false;
        }
        if m == 0 {
            return true;
        }
        (0..m).any(|shift| relabels_with_shift(&self.labels, other, shift))
    }
}

/// Try to build the bijection for one shift, greedily in a single pass.
fn relabels_with_shift(this: &[PointLabel], other: &[PointLabel], shift: usize) -> bool {
    let m = this.len();
    let mut forward: HashMap<PointLabel, PointLabel> = HashMap::new();
    let mut backward: HashMap<PointLabel, PointLabel> = HashMap::new();
    for (i, &image) in this.iter().enumerate() {
        let source = other[(i + shift) % m];
        match forward.get(&source) {
            Some(&assigned) if assigned != image => return false,
            Some(_) => {}
            None => {
                if backward.contains_key(&image) {
                    return false;
                }
                forward.insert(source, image);
                backward.insert(image, source);
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate(labels: &[PointLabel], by: usize) -> Vec<PointLabel> {
        let mut rotated = labels.to_vec();
        rotated.rotate_left(by);
        rotated
    }

    #[test]
    fn test_reflexive() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 4, 2, 4, 3]);
        assert!(code.is_equivalent(code.labels()));
    }

    #[test]
    fn test_invariant_under_rotation_and_relabelling() {
        let labels = vec![1, 2, 3, 1, 4, 2, 4, 3];
        let code = GaussCode::closed(labels.clone());
        for by in 0..labels.len() {
            let rotated = rotate(&labels, by);
            assert!(code.is_equivalent(&rotated), "rotation by {}", by);
            let relabelled: Vec<PointLabel> = rotated.iter().map(|&l| 5 - l).collect();
            assert!(code.is_equivalent(&relabelled), "relabelled rotation by {}", by);
        }
    }

    #[test]
    fn test_different_lengths_are_not_equivalent() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert!(!code.is_equivalent(&[1, 2, 1, 2]));
    }

    #[test]
    fn test_distinct_structures_are_not_equivalent() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert!(!code.is_equivalent(&[1, 2, 3, 3, 2, 1]));
    }

    #[test]
    fn test_rejects_non_injective_mapping() {
        // Mapping 1 -> 1 and 2 -> 1 would fit pointwise but is not a bijection.
        let code = GaussCode::open(vec![1, 1]);
        assert!(!code.is_equivalent(&[1, 2]));
        let code = GaussCode::open(vec![1, 2]);
        assert!(!code.is_equivalent(&[1, 1]));
    }
}
