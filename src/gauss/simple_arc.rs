// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple arcs: runs of consecutive points that are pairwise distinct.

use std::collections::HashMap;

use super::GaussCode;
use crate::geometry::PointLabel;

impl GaussCode {
    /// Whether the code contains a simple arc through `length` points.
    ///
    /// An open code cannot contain a simple arc longer than its number of
    /// points. For a closed code `length` is clamped to the number of
    /// points, and windows wrap around the end.
    pub fn has_simple_arc(&self, length: usize) -> bool {
        match self.arc_length(length) {
            Some(length) => self.has_window_of_distinct(length),
            None => false,
        }
    }

    /// The window length actually tested for a requested arc length, or
    /// `None` when no such arc can exist yet.
    pub(crate) fn arc_length(&self, length: usize) -> Option<usize> {
        if self.closed {
            Some(length.min(self.points))
        } else if length > self.points {
            None
        } else {
            Some(length)
        }
    }

    /// Sliding-window test for `length` consecutive pairwise distinct labels.
    pub fn has_window_of_distinct(&self, length: usize) -> bool {
        let n = self.labels.len();
        if length == 0 {
            return true;
        }
        if length > n {
            return false;
        }

        let mut window = Window::default();
        for &label in &self.labels[..length] {
            window.push(label);
        }
        if window.distinct() == length {
            return true;
        }

        // Closed codes need length - 1 further windows across the seam.
        let end = if self.closed { n + length - 1 } else { n };
        for i in length..end {
            window.pop(self.labels[i - length]);
            window.push(self.at(i));
            if window.distinct() == length {
                return true;
            }
        }
        false
    }
}

/// Multiset of the labels currently inside the window.
#[derive(Default)]
struct Window {
    counts: HashMap<PointLabel, usize>,
}

impl Window {
    fn push(&mut self, label: PointLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    fn pop(&mut self, label: PointLabel) {
        if let Some(count) = self.counts.get_mut(&label) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&label);
            }
        }
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_window_found() {
        let code = GaussCode::open(vec![1, 2, 1, 3, 4, 5, 2]);
        assert!(code.has_simple_arc(4)); // 2 1 3 4
        assert!(code.has_simple_arc(5)); // 2 1 3 4 5
        assert!(!GaussCode::open(vec![1, 2, 1, 3, 2, 3, 4, 3]).has_simple_arc(4));
    }

    #[test]
    fn test_period_two_has_no_arc_of_three() {
        let code = GaussCode::open(vec![1, 2, 1, 2, 1, 2, 1, 2]);
        assert!(code.has_simple_arc(2));
        assert!(!code.has_simple_arc(3));
    }

    #[test]
    fn test_open_code_fails_fast_beyond_point_count() {
        let code = GaussCode::open(vec![1, 2, 3]);
        assert!(code.has_simple_arc(3));
        assert!(!code.has_simple_arc(4));
    }

    #[test]
    fn test_closed_code_wraps_around() {
        // Only the window 2 4 | 3 across the seam is distinct.
        let labels = vec![3, 1, 1, 2, 2, 4];
        assert!(!GaussCode::open(labels.clone()).has_window_of_distinct(3));
        assert!(GaussCode::closed(labels).has_window_of_distinct(3));
    }

    #[test]
    fn test_closed_code_clamps_length() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert!(code.has_simple_arc(6));
        assert!(code.has_simple_arc(3));
    }

    #[test]
    fn test_zero_length_is_trivial() {
        assert!(GaussCode::new().has_window_of_distinct(0));
    }
}
