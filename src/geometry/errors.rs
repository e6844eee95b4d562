// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for diagram surgery.
//!
//! Every variant is a broken precondition of a diagram operation. None of
//! them is recoverable: the search drops the branch that produced one.

use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter, IntoStaticStr};
use thiserror::Error;

use super::{DomainLabel, PointLabel};

/// Errors raised by domain and diagram operations.
///
/// `DiagramErrorKind` is the fieldless twin of this enum, used to index
/// per-kind counters.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro, EnumDiscriminants, IntoStaticStr)]
#[strum_discriminants(name(DiagramErrorKind), derive(IntoStaticStr, EnumIter))]
pub enum DiagramError {
    /// `extend` was asked to add no points.
    #[error("cannot extend a diagram by zero marked points")]
    EmptyExtension,

    /// The domain was expected to carry the end of the curve.
    #[error("domain {domain} does not contain the endpoint")]
    EndpointMissing { domain: DomainLabel },

    /// The domain was expected to carry the given point on its boundary.
    #[error("point {point} is not on the boundary of domain {domain}")]
    PointNotOnBoundary {
        point: PointLabel,
        domain: DomainLabel,
    },

    /// The point cannot be reached from the endpoint.
    #[error("point {point} is not available from domain {domain}")]
    PointNotAvailable { point: i32, domain: DomainLabel },

    /// The point is not a marked point of the diagram.
    #[error("point {point} is not a marked point")]
    UnknownPoint { point: PointLabel },

    /// The open-edge map does not place the point on the endpoint domain.
    #[error("point {point} is recorded between {first} and {second}, not on {expected}")]
    InconsistentEdge {
        point: PointLabel,
        first: DomainLabel,
        second: DomainLabel,
        expected: DomainLabel,
    },

    /// Passing through one occurrence would carry the other into the new domain.
    #[error("passing point {point} on domain {domain} would cut off its other occurrence")]
    OccurrenceCutOff { point: PointLabel, domain: DomainLabel },

    /// A seam refers to a twin that is not there.
    #[error("seam {seam} has no twin on domain {domain}")]
    MissingSeam { seam: u32, domain: DomainLabel },

    /// A freshly created domain already had a boundary.
    #[error("domain {domain} is not empty")]
    DomainNotEmpty { domain: DomainLabel },

    /// A flype was requested where the code does not read `a b c a`.
    #[error("no flype pattern at position {index}")]
    NotAFlype { index: usize },

    /// The diagram is closed and can no longer be built on.
    #[error("diagram is already closed")]
    Closed,
}

impl DiagramError {
    /// Short stable name of the failure kind, for statistics and logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_error_messages_carry_labels() {
        let err = DiagramError::PointNotOnBoundary {
            point: 4,
            domain: DomainLabel::new(2),
        };
        assert_eq!(err.to_string(), "point 4 is not on the boundary of domain V_2");
    }

    #[test]
    fn test_error_kind_names() {
        assert_eq!(DiagramError::Closed.kind(), "Closed");
        assert_eq!(DiagramError::NotAFlype { index: 3 }.kind(), "NotAFlype");
        assert_eq!(DiagramError::COUNT, 11);
    }

    #[test]
    fn test_kind_discriminants_are_dense() {
        assert_eq!(DiagramErrorKind::from(&DiagramError::EmptyExtension) as usize, 0);
        assert_eq!(DiagramErrorKind::from(&DiagramError::Closed) as usize, DiagramError::COUNT - 1);
        assert_eq!(DiagramErrorKind::iter().count(), DiagramError::COUNT);
    }
}
