// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagrams: an immersed oriented curve, open or closed, built step by step.
//!
//! A diagram keeps two views of the same history in step:
//! - the Gauss code, listing the points in traversal order
//! - the atlas of domains cut out by the curve, plus the open-edge map
//!   saying which domains each still-marked point lies between
//!
//! It is built with three operations only:
//! - `extend(k)`: add `k` marked points just before the end of the curve
//! - `pass_through(p)`: draw a simple arc from the end through marked point `p`
//! - `close()`: join the two ends without crossing anything
//!
//! Diagrams are plain values. Cloning one copies the atlas, the code and the
//! open edges, so search branches never share state.

pub mod atlas;
pub mod open_edges;

pub use atlas::Atlas;
pub use open_edges::OpenEdges;

use std::collections::BTreeSet;
use std::fmt;

use crate::gauss::GaussCode;
use crate::geometry::{point_label, DiagramError, Domain, DomainLabel, PointLabel, SeamLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    gauss_code: GaussCode,
    atlas: Atlas,
    open_edges: OpenEdges,
    /// The unique domain carrying the end of the curve.
    endpoint: DomainLabel,
    next_seam: SeamLabel,
    closed: bool,
}

impl Diagram {
    /// An open curve with no points: a single domain `[Start, End]`.
    pub fn new() -> Self {
        Self {
            gauss_code: GaussCode::new(),
            atlas: Atlas::new(),
            open_edges: OpenEdges::new(),
            endpoint: DomainLabel::INITIAL,
            next_seam: SeamLabel::new(1),
            closed: false,
        }
    }

    /// An open curve carrying `count` marked points.
    pub fn with_marked_points(count: u32) -> Result<Self, DiagramError> {
        let mut diagram = Self::new();
        diagram.extend(count)?;
        Ok(diagram)
    }

    pub fn gauss_code(&self) -> &GaussCode {
        &self.gauss_code
    }

    /// Number of points (marked or double) created so far.
    pub fn point_count(&self) -> usize {
        self.gauss_code.points()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    pub fn open_edges(&self) -> &OpenEdges {
        &self.open_edges
    }

    pub fn endpoint_domain(&self) -> &Domain {
        &self.atlas[self.endpoint]
    }

    /// Add `count` new marked points in a small neighbourhood of the end.
    pub fn extend(&mut self, count: u32) -> Result<(), DiagramError> {
        if self.closed {
            return Err(DiagramError::Closed);
        }
        if count == 0 {
            return Err(DiagramError::EmptyExtension);
        }
        let end = self.endpoint;
        let first = self.gauss_code.points() as PointLabel + 1;
        self.atlas[end].add_new_marked_points_before_end(first, count)?;
        let appended = self.gauss_code.append_fresh(count);
        debug_assert_eq!(appended, first);

        for point in first..first + count {
            self.open_edges.insert(point, end, end);
        }
        self.debug_check_endpoint();
        Ok(())
    }

    /// Extend the curve through an available marked point.
    ///
    /// `point` is taken from `available_points()`: a negative value passes
    /// the point from the right, reaching its first occurrence on the
    /// boundary of the endpoint domain instead of its last.
    ///
    /// The preconditions are checked before anything changes, including
    /// that a point met twice on the end domain keeps its other occurrence
    /// there. An error raised after that means the diagram was already
    /// inconsistent, and it should be discarded.
    pub fn pass_through(&mut self, point: i32) -> Result<(), DiagramError> {
        if self.closed {
            return Err(DiagramError::Closed);
        }
        let label = point_label(point);
        let end = self.endpoint;
        if !self.atlas[end].all_marked_points().contains(&point) {
            return Err(DiagramError::PointNotAvailable { point, domain: end });
        }
        let (first, second) = self
            .open_edges
            .get(label)
            .ok_or(DiagramError::UnknownPoint { point: label })?;
        let other = if first == end {
            second
        } else if second == end {
            first
        } else {
            return Err(DiagramError::InconsistentEdge {
                point: label,
                first,
                second,
                expected: end,
            });
        };
        let from_left = point > 0;

        // The split checks its own preconditions before moving anything.
        let mut fresh = Domain::new(self.atlas.next_label());
        self.atlas[end].go_through_point(label, &mut fresh, from_left, self.next_seam)?;
        self.next_seam = self.next_seam.next();
        self.gauss_code.push_crossing(label);
        let fresh = self.atlas.push(fresh);
        self.atlas.repoint_seams_of(fresh)?;

        // The curve carries on from the far side of the point.
        self.atlas[other].transform_point_into_endpoint(label, from_left)?;
        self.open_edges.remove(label);
        self.endpoint = other;

        let moved: BTreeSet<PointLabel> = self.atlas[fresh]
            .boundary()
            .iter()
            .filter_map(|e| e.point())
            .collect();
        for point in moved {
            let sides = self.atlas[fresh].occurrences(point);
            self.open_edges.repoint(point, end, fresh, sides);
        }
        self.debug_check_endpoint();
        Ok(())
    }

    /// Close the curve if every point is a double point and both ends face
    /// the same domain. Leaves the diagram untouched otherwise.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return true;
        }
        if self.gauss_code.len() == 2 * self.gauss_code.points()
            && self.atlas[self.endpoint].can_be_closed()
        {
            self.closed = true;
            self.gauss_code.close();
        }
        self.closed
    }

    /// Points the curve may pass through next, under the negated-duplicate
    /// convention of `Domain::all_marked_points`.
    pub fn available_points(&self) -> BTreeSet<i32> {
        self.atlas[self.endpoint].all_marked_points()
    }

    /// Whether exactly one point, from exactly one side or from both, is
    /// available.
    pub fn is_unique_continuation(&self) -> bool {
        let points = self.available_points();
        points.len() == 1 || (points.len() == 2 && points.iter().sum::<i32>() == 0)
    }

    /// Necessary conditions for completing the diagram to a closed curve:
    /// no loop through an odd number of points, and all domains touched by
    /// marked points joined through marked points.
    pub fn check_correctness(&self) -> bool {
        !self.gauss_code.has_odd_loop() && self.open_edges.is_connected()
    }

    pub fn check_irreducibility(&self) -> bool {
        self.gauss_code.is_irreducible()
    }

    pub fn has_simple_arc(&self, length: usize) -> bool {
        self.gauss_code.has_simple_arc(length)
    }

    pub fn has_simple_arc_with_flypes(&self, length: usize) -> bool {
        self.gauss_code.has_simple_arc_with_flypes(length)
    }

    pub fn is_equivalent(&self, other: &[PointLabel]) -> bool {
        self.gauss_code.is_equivalent(other)
    }

    fn debug_check_endpoint(&self) {
        debug_assert_eq!(
            self.atlas.domains_with_endpoint().collect::<Vec<_>>(),
            vec![self.endpoint],
            "exactly one domain must carry the end of the curve"
        );
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.gauss_code)?;
        writeln!(f, "----------------------")?;
        writeln!(f, "List of edges ({} in total):", self.open_edges.len())?;
        for (point, (first, second)) in self.open_edges.iter() {
            writeln!(f, "\t{}: {} -> {}", point, first, second)?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "List of domains ({} in total):", self.atlas.len())?;
        for domain in self.atlas.iter() {
            write!(f, "{}", domain)?;
        }
        writeln!(f, "----------------------")
    }
}
