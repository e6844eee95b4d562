// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Elements of a domain boundary.

use std::fmt;

use super::{DomainLabel, PointLabel, SeamLabel};

/// One element of a domain's boundary, read in boundary order.
///
/// While the curve is open a boundary is a linear sequence. The two ends of
/// the curve appear as `Start` and `End`, marked points (and their second
/// sides) as `Point`, and the places where the curve was drawn across the
/// domain as `Seam`s, paired by label with a seam on the neighbouring domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryElement {
    /// The beginning of the curve.
    Start,
    /// The current end of the curve.
    End,
    /// A marked point.
    Point(PointLabel),
    /// Half of a seam shared with `neighbour`.
    Seam {
        label: SeamLabel,
        neighbour: DomainLabel,
    },
}

impl BoundaryElement {
    /// The point label, if this element is a marked point.
    pub fn point(&self) -> Option<PointLabel> {
        match self {
            BoundaryElement::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_point(&self, label: PointLabel) -> bool {
        matches!(self, BoundaryElement::Point(p) if *p == label)
    }
}

impl fmt::Display for BoundaryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryElement::Start => write!(f, "beginning of the curve"),
            BoundaryElement::End => write!(f, "end of the curve"),
            BoundaryElement::Point(p) => write!(f, "point {}", p),
            BoundaryElement::Seam { label, neighbour } => {
                write!(f, "domain {} (seam {})", neighbour, label.value())
            }
        }
    }
}
