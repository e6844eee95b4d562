// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for immersed plane curves.
//!
//! This module contains the planar-subdivision side of a diagram:
//! - Labels: points, domains and seams
//! - BoundaryElement: what a domain boundary is made of
//! - Domain: one face of the plane and its boundary surgery
//! - DiagramError: broken preconditions of that surgery

pub mod boundary;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod label;

// Re-export for convenience
pub use boundary::BoundaryElement;
pub use constants::*;
pub use domain::Domain;
pub use errors::{DiagramError, DiagramErrorKind};
pub use label::{point_label, DomainLabel, PointLabel, SeamLabel};
