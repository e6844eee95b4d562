// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss codes and the structural predicates read off them.
//!
//! A Gauss code lists, in traversal order, every marked or double point the
//! curve passes. While the curve is open the code is a plain sequence; once
//! the curve is closed it is read circularly.
//!
//! # Organization
//!
//! - `simple_arc`: windows of pairwise distinct points
//! - `flype`: the `a b c a` rewrite and the bounded flype exploration
//! - `irreducibility`: factorisation into independent sub-loops
//! - `equivalence`: equality up to rotation and relabelling

pub mod equivalence;
pub mod flype;
pub mod irreducibility;
pub mod simple_arc;

use std::collections::HashSet;
use std::fmt;

use crate::geometry::PointLabel;

/// The Gauss code of an open or closed curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GaussCode {
    labels: Vec<PointLabel>,
    /// Number of distinct points (marked or double) the code refers to.
    points: usize,
    closed: bool,
}

impl GaussCode {
    /// The code of a curve with no points yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// An open code, read linearly.
    pub fn open(labels: Vec<PointLabel>) -> Self {
        let points = distinct(&labels);
        Self {
            labels,
            points,
            closed: false,
        }
    }

    /// A closed code, read circularly.
    pub fn closed(labels: Vec<PointLabel>) -> Self {
        let points = distinct(&labels);
        Self {
            labels,
            points,
            closed: true,
        }
    }

    pub fn labels(&self) -> &[PointLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct points the code refers to.
    pub fn points(&self) -> usize {
        self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Append `count` fresh points, numbered after the existing ones.
    ///
    /// Returns the label of the first new point.
    pub(crate) fn append_fresh(&mut self, count: u32) -> PointLabel {
        let first = self.points as PointLabel + 1;
        self.labels.extend(first..first + count);
        self.points += count as usize;
        first
    }

    /// Record the curve passing through an existing point.
    pub(crate) fn push_crossing(&mut self, label: PointLabel) {
        self.labels.push(label);
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    /// Label at `index`, wrapping around the end.
    fn at(&self, index: usize) -> PointLabel {
        self.labels[index % self.labels.len()]
    }

    /// Whether two equal labels sit an even, non-zero distance apart.
    ///
    /// Such a pair closes a loop through an odd number of points, which no
    /// closed curve in general position can have.
    pub fn has_odd_loop(&self) -> bool {
        let n = self.labels.len();
        (0..n).any(|i| {
            (i + 2..n)
                .step_by(2)
                .any(|j| self.labels[i] == self.labels[j])
        })
    }
}

fn distinct(labels: &[PointLabel]) -> usize {
    labels.iter().collect::<HashSet<_>>().len()
}

impl fmt::Display for GaussCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[{}]", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code_is_empty() {
        let code = GaussCode::new();
        assert!(code.is_empty());
        assert_eq!(code.points(), 0);
        assert!(!code.is_closed());
    }

    #[test]
    fn test_append_fresh_numbers_sequentially() {
        let mut code = GaussCode::new();
        assert_eq!(code.append_fresh(3), 1);
        code.push_crossing(2);
        assert_eq!(code.append_fresh(2), 4);
        assert_eq!(code.labels(), &[1, 2, 3, 2, 4, 5]);
        assert_eq!(code.points(), 5);
    }

    #[test]
    fn test_points_counts_distinct_labels() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(code.points(), 3);
        assert_eq!(code.len(), 6);
        assert!(code.is_closed());
    }

    #[test]
    fn test_display_brackets_labels() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(code.to_string(), "[1] [2] [3] [1] [2] [3]");
        assert_eq!(GaussCode::new().to_string(), "");
    }

    #[test]
    fn test_odd_loop_detection() {
        // 1 _ 1: a loop through a single point.
        assert!(GaussCode::open(vec![1, 2, 1]).has_odd_loop());
        // 1 2 3 1: a loop through two points is fine.
        assert!(!GaussCode::open(vec![1, 2, 3, 1]).has_odd_loop());
        assert!(!GaussCode::closed(vec![1, 2, 3, 1, 2, 3]).has_odd_loop());
        assert!(GaussCode::open(vec![1, 2, 3, 4, 1]).has_odd_loop());
    }
}
