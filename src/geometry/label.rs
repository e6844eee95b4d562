// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Label types for points, domains and seams.
//!
//! Point labels are plain positive integers because they are what a Gauss
//! code is made of. Domain and seam labels are newtypes so they cannot be
//! mixed up with points or with each other.

use std::fmt;

/// Label of a marked or double point. Assigned from 1 in creation order.
pub type PointLabel = u32;

/// Label of a domain (face) in a diagram's atlas.
///
/// Domain labels double as arena indices: domain `n` is the `n`-th domain
/// ever created in its diagram, and labels are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DomainLabel(usize);

impl DomainLabel {
    /// The label of the initial domain of every diagram.
    pub const INITIAL: DomainLabel = DomainLabel(0);

    pub fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the label as a usize (for arena indexing).
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V_{}", self.0)
    }
}

/// Label shared by the two halves of a seam between adjacent domains.
///
/// Seam labels are handed out by the owning diagram, so two diagrams never
/// share a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeamLabel(u32);

impl SeamLabel {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The label handed out after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Convert a signed point (negative meaning "the other side") to its label.
pub fn point_label(signed: i32) -> PointLabel {
    signed.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_label_display() {
        assert_eq!(DomainLabel::new(3).to_string(), "V_3");
        assert_eq!(DomainLabel::INITIAL.as_usize(), 0);
    }

    #[test]
    fn test_seam_label_next() {
        let seam = SeamLabel::new(1);
        assert_eq!(seam.next().value(), 2);
    }

    #[test]
    fn test_point_label_drops_sign() {
        assert_eq!(point_label(-4), 4);
        assert_eq!(point_label(4), 4);
    }
}
