// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Domains: the faces of the plane cut out by the curve drawn so far.
//!
//! A domain only knows its own boundary. Which domain lies across a marked
//! point is bookkept by the diagram, so every operation here is local surgery
//! on one boundary sequence (plus the fresh domain receiving a split-off part).

use std::collections::BTreeSet;
use std::fmt;

use super::{BoundaryElement, DiagramError, DomainLabel, PointLabel, SeamLabel};

/// A face of the plane subdivision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    label: DomainLabel,
    boundary: Vec<BoundaryElement>,
}

impl Domain {
    /// The first domain of every diagram: the whole plane around a short arc.
    pub fn initial() -> Self {
        Self {
            label: DomainLabel::INITIAL,
            boundary: vec![BoundaryElement::Start, BoundaryElement::End],
        }
    }

    /// A domain with an empty boundary, to be filled by `go_through_point`.
    pub fn new(label: DomainLabel) -> Self {
        Self {
            label,
            boundary: Vec::new(),
        }
    }

    pub fn label(&self) -> DomainLabel {
        self.label
    }

    pub fn boundary(&self) -> &[BoundaryElement] {
        &self.boundary
    }

    pub fn contains_endpoint(&self) -> bool {
        self.boundary.contains(&BoundaryElement::End)
    }

    pub fn contains_start(&self) -> bool {
        self.boundary.contains(&BoundaryElement::Start)
    }

    pub fn contains_marked_points(&self) -> bool {
        self.boundary.iter().any(|e| e.point().is_some())
    }

    /// Both ends of the curve lie on this domain, so it can be closed here.
    pub fn can_be_closed(&self) -> bool {
        self.contains_start() && self.contains_endpoint()
    }

    /// Number of times `label` occurs on the boundary (0, 1 or 2).
    pub fn occurrences(&self, label: PointLabel) -> usize {
        self.boundary.iter().filter(|e| e.is_point(label)).count()
    }

    /// Distinct marked points on the boundary.
    ///
    /// A point occurring twice is also reported negated, so `{3, -3}` means
    /// point 3 can be reached from either side.
    pub fn all_marked_points(&self) -> BTreeSet<i32> {
        let mut points = BTreeSet::new();
        for label in self.boundary.iter().filter_map(BoundaryElement::point) {
            let p = label as i32;
            if !points.insert(p) {
                points.insert(-p);
            }
        }
        points
    }

    fn endpoint_index(&self) -> Result<usize, DiagramError> {
        self.boundary
            .iter()
            .position(|e| *e == BoundaryElement::End)
            .ok_or(DiagramError::EndpointMissing { domain: self.label })
    }

    fn point_index(&self, label: PointLabel, last: bool) -> Result<usize, DiagramError> {
        let found = if last {
            self.boundary.iter().rposition(|e| e.is_point(label))
        } else {
            self.boundary.iter().position(|e| e.is_point(label))
        };
        found.ok_or(DiagramError::PointNotOnBoundary {
            point: label,
            domain: self.label,
        })
    }

    /// Insert `count` new points on both sides of the curve just before its end.
    ///
    /// `X End Y` becomes `X p1 .. pk End pk .. p1 Y` with `p_i = first + i - 1`.
    pub fn add_new_marked_points_before_end(
        &mut self,
        first: PointLabel,
        count: u32,
    ) -> Result<(), DiagramError> {
        let end = self.endpoint_index()?;
        let labels = first..first + count;
        let mut boundary = Vec::with_capacity(self.boundary.len() + 2 * count as usize);
        boundary.extend_from_slice(&self.boundary[..end]);
        boundary.extend(labels.clone().map(BoundaryElement::Point));
        boundary.push(BoundaryElement::End);
        boundary.extend(labels.rev().map(BoundaryElement::Point));
        boundary.extend_from_slice(&self.boundary[end + 1..]);
        self.boundary = boundary;
        Ok(())
    }

    /// Draw the curve from its end to `transition` across this domain.
    ///
    /// The boundary strictly between the end and the chosen occurrence of
    /// `transition` moves, in order, to `new_domain` behind a seam; here the
    /// end, the interval and the transition point are replaced by the twin
    /// seam. `pass_from_left` picks the last occurrence, otherwise the first.
    ///
    /// Seams that moved still have twins pointing at this domain; the
    /// diagram repoints them. When `transition` occurs twice here, the other
    /// occurrence must stay behind, or the curve could not carry on from it.
    pub fn go_through_point(
        &mut self,
        transition: PointLabel,
        new_domain: &mut Domain,
        pass_from_left: bool,
        seam: SeamLabel,
    ) -> Result<(), DiagramError> {
        if !new_domain.boundary.is_empty() {
            return Err(DiagramError::DomainNotEmpty {
                domain: new_domain.label,
            });
        }
        let end = self.endpoint_index()?;
        let crossing = self.point_index(transition, pass_from_left)?;
        let (lo, hi) = if end < crossing {
            (end, crossing)
        } else {
            (crossing, end)
        };
        let other = self.point_index(transition, !pass_from_left)?;
        if other != crossing && lo < other && other < hi {
            return Err(DiagramError::OccurrenceCutOff {
                point: transition,
                domain: self.label,
            });
        }

        new_domain.boundary.reserve(hi - lo);
        new_domain.boundary.push(BoundaryElement::Seam {
            label: seam,
            neighbour: self.label,
        });
        new_domain
            .boundary
            .extend(self.boundary.drain(lo..=hi).skip(1).take(hi - lo - 1));
        self.boundary.insert(
            lo,
            BoundaryElement::Seam {
                label: seam,
                neighbour: new_domain.label,
            },
        );
        Ok(())
    }

    /// Overwrite an occurrence of `label` with the end of the curve.
    ///
    /// Used on the far side of a transition point: the curve now continues
    /// from there.
    pub fn transform_point_into_endpoint(
        &mut self,
        label: PointLabel,
        last: bool,
    ) -> Result<(), DiagramError> {
        let index = self.point_index(label, last)?;
        self.boundary[index] = BoundaryElement::End;
        Ok(())
    }

    /// Seams on this boundary, as (label, neighbour) pairs.
    pub fn seams(&self) -> impl Iterator<Item = (SeamLabel, DomainLabel)> + '_ {
        self.boundary.iter().filter_map(|e| match e {
            BoundaryElement::Seam { label, neighbour } => Some((*label, *neighbour)),
            _ => None,
        })
    }

    /// Point the seam labelled `seam` at `neighbour`.
    pub fn repoint_seam(
        &mut self,
        seam: SeamLabel,
        neighbour: DomainLabel,
    ) -> Result<(), DiagramError> {
        let element = self
            .boundary
            .iter_mut()
            .find(|e| matches!(e, BoundaryElement::Seam { label, .. } if *label == seam))
            .ok_or(DiagramError::MissingSeam {
                seam: seam.value(),
                domain: self.label,
            })?;
        *element = BoundaryElement::Seam {
            label: seam,
            neighbour,
        };
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "###### DOMAIN {} ######", self.label)?;
        for element in &self.boundary {
            writeln!(f, "\t{}", element)?;
        }
        Ok(())
    }
}
