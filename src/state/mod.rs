// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state.
//!
//! - `Node`: one diagram on the search path, with the action that made it
//! - `ExceptionalCurves`: the results found so far, one per equivalence class
//! - `Statistics`: counters for what the search pruned and kept

pub mod statistics;

pub use statistics::{Counters, Statistics};

use std::fmt;

use crate::diagram::Diagram;
use crate::gauss::GaussCode;

/// The step that produced a diagram from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add this many marked points near the end of the curve.
    Extend(u32),
    /// Cross this available point; negative means from the right.
    PassThrough(i32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Extend(count) => write!(f, "extend({})", count),
            Action::PassThrough(point) => write!(f, "pass_through({})", point),
        }
    }
}

/// A diagram on the search path.
#[derive(Debug, Clone)]
pub struct Node {
    pub diagram: Diagram,
    /// Seed diagrams count as produced by an extension.
    pub last_action: Action,
}

impl Node {
    pub fn new(diagram: Diagram, last_action: Action) -> Self {
        Self {
            diagram,
            last_action,
        }
    }
}

/// Closed curves found without the required simple arc.
///
/// Only one code per equivalence class (rotation and relabelling) is kept.
#[derive(Debug, Default)]
pub struct ExceptionalCurves {
    codes: Vec<GaussCode>,
}

impl ExceptionalCurves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `code` unless an equivalent one is already known.
    ///
    /// Returns whether it was new.
    pub fn record(&mut self, code: &GaussCode) -> bool {
        if self.codes.iter().any(|known| known.is_equivalent(code.labels())) {
            return false;
        }
        self.codes.push(code.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The codes ordered by length, in discovery order within a length.
    pub fn into_sorted(mut self) -> Vec<GaussCode> {
        self.codes.sort_by_key(GaussCode::len);
        self.codes
    }
}
