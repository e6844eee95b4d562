// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flypes: a local rewrite of the curve that keeps it equivalent.
//!
//! Only the simplest flype is used, around a loop `a b c a` through two
//! points. In Gauss code terms it reads
//!
//! ```text
//! 1) S1 a b c a S2 (b|c) S3 (c|b) S4  ->  S1 b c S2 a (b|c) S3 (c|b) a S4
//! 2) S1 a b c a S2 (b|c) S3           ->  S1 b c S2 a (b|c) S3
//! 3) S1 a b c a S2                    ->  S1 b c S2
//! ```
//!
//! depending on whether both, one or none of `b` and `c` occur again.

use super::GaussCode;
use crate::geometry::{DiagramError, PointLabel};

impl GaussCode {
    /// Whether the code reads `a _ _ a` from `index`.
    pub fn is_flype_site(&self, index: usize) -> bool {
        let n = self.labels.len();
        if n < 4 || index >= n || (!self.closed && index + 3 >= n) {
            return false;
        }
        self.labels[index] == self.at(index + 3)
    }

    /// Apply the flype around the loop `a b c a` starting at `index`.
    ///
    /// A closed code is rewritten starting from `b`, so the result is a
    /// rotation of the flyped curve.
    pub fn make_flype_in(&self, index: usize) -> Result<GaussCode, DiagramError> {
        if !self.is_flype_site(index) {
            return Err(DiagramError::NotAFlype { index });
        }
        let n = self.labels.len();
        let mut rewrite = Rewrite {
            a: self.at(index),
            b: self.at(index + 1),
            c: self.at(index + 2),
            seen: 0,
            out: Vec::with_capacity(n),
        };

        if self.closed {
            rewrite.emit_loop();
            for k in 4..n {
                rewrite.place(self.at(index + k));
            }
        } else {
            for &label in &self.labels[..index] {
                rewrite.place(label);
            }
            rewrite.emit_loop();
            for &label in &self.labels[index + 4..] {
                rewrite.place(label);
            }
        }

        let mut flyped = GaussCode::open(rewrite.out);
        flyped.closed = self.closed;
        Ok(flyped)
    }

    /// Whether a simple arc through `length` points appears, possibly after flypes.
    ///
    /// This is a bounded sweep, not a search over all flype sequences: for
    /// each skip count the code is scanned once, and every flype site after
    /// the first `skip` ones is flyped in place as the scan reaches it.
    pub fn has_simple_arc_with_flypes(&self, length: usize) -> bool {
        let Some(length) = self.arc_length(length) else {
            return false;
        };
        if self.has_window_of_distinct(length) {
            return true;
        }

        for skip in 0..self.points {
            let mut code = self.clone();
            let mut sites = 0;
            let mut i = 0;
            while i < code.flype_scan_end() {
                if code.is_flype_site(i) {
                    sites += 1;
                    if sites > skip {
                        let Ok(flyped) = code.make_flype_in(i) else {
                            break;
                        };
                        code = flyped;
                        if code.has_window_of_distinct(length) {
                            return true;
                        }
                    }
                }
                i += 1;
            }
        }
        false
    }

    fn flype_scan_end(&self) -> usize {
        if self.closed {
            self.labels.len()
        } else {
            self.labels.len().saturating_sub(3)
        }
    }
}

/// Output of a flype under construction.
struct Rewrite {
    a: PointLabel,
    b: PointLabel,
    c: PointLabel,
    /// How many later occurrences of `b` or `c` were met.
    seen: usize,
    out: Vec<PointLabel>,
}

impl Rewrite {
    fn emit_loop(&mut self) {
        self.out.push(self.b);
        self.out.push(self.c);
    }

    fn place(&mut self, label: PointLabel) {
        if label != self.b && label != self.c {
            self.out.push(label);
            return;
        }
        self.seen += 1;
        if self.seen == 1 {
            self.out.push(self.a);
            self.out.push(label);
        } else {
            self.out.push(label);
            self.out.push(self.a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flype_both_points_recur() {
        let code = GaussCode::open(vec![1, 2, 3, 1, 4, 2, 5, 3]);
        let flyped = code.make_flype_in(0).unwrap();
        assert_eq!(flyped.labels(), &[2, 3, 4, 1, 2, 5, 3, 1]);
        assert_eq!(flyped.points(), 5);
    }

    #[test]
    fn test_flype_one_point_recurs() {
        let code = GaussCode::open(vec![1, 2, 3, 1, 4, 2]);
        let flyped = code.make_flype_in(0).unwrap();
        assert_eq!(flyped.labels(), &[2, 3, 4, 1, 2]);
    }

    #[test]
    fn test_flype_collapses_loop() {
        let code = GaussCode::open(vec![1, 2, 3, 1, 4]);
        let flyped = code.make_flype_in(0).unwrap();
        assert_eq!(flyped.labels(), &[2, 3, 4]);
        assert_eq!(flyped.points(), 3);
    }

    #[test]
    fn test_flype_keeps_prefix() {
        let code = GaussCode::open(vec![5, 1, 2, 3, 1, 5]);
        let flyped = code.make_flype_in(1).unwrap();
        assert_eq!(flyped.labels(), &[5, 2, 3, 5]);
        assert!(!flyped.is_closed());
    }

    #[test]
    fn test_closed_flype_starts_at_loop() {
        let expected = [2, 3, 4, 1, 2, 4, 3, 1];
        let code = GaussCode::closed(vec![1, 2, 3, 1, 4, 2, 4, 3]);
        assert_eq!(code.make_flype_in(0).unwrap().labels(), &expected);

        // The same curve, rotated.
        let rotated = GaussCode::closed(vec![4, 2, 4, 3, 1, 2, 3, 1]);
        let flyped = rotated.make_flype_in(4).unwrap();
        assert_eq!(flyped.labels(), &expected);
        assert!(flyped.is_closed());
    }

    #[test]
    fn test_flype_requires_pattern() {
        let code = GaussCode::open(vec![1, 2, 3, 4, 1]);
        assert_eq!(code.make_flype_in(0), Err(DiagramError::NotAFlype { index: 0 }));
        // Open codes do not wrap.
        let code = GaussCode::open(vec![2, 1, 3, 4, 1]);
        assert!(code.make_flype_in(1).is_ok());
        assert!(code.make_flype_in(3).is_err());
    }

    #[test]
    fn test_flypes_reveal_open_arc() {
        let code = GaussCode::open(vec![5, 1, 3, 2, 1, 4, 2]);
        assert!(!code.has_simple_arc(5));
        assert!(code.has_simple_arc_with_flypes(5));
    }

    #[test]
    fn test_flypes_reveal_closed_arc() {
        let code = GaussCode::closed(vec![1, 2, 5, 1, 4, 5, 4, 3, 2, 3]);
        assert!(!code.has_simple_arc(5));
        assert!(code.has_simple_arc_with_flypes(5));
    }

    #[test]
    fn test_flypes_respect_open_fail_fast() {
        let code = GaussCode::open(vec![1, 2, 3, 1]);
        assert!(!code.has_simple_arc_with_flypes(4));
    }

    #[test]
    fn test_plain_arc_implies_flype_arc() {
        let code = GaussCode::closed(vec![1, 2, 3, 1, 2, 3]);
        assert!(code.has_simple_arc(3));
        assert!(code.has_simple_arc_with_flypes(3));
    }
}
