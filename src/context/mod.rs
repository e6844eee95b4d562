// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context.
//!
//! The SearchContext is the one mutable value threaded through every
//! predicate:
//! - the configuration of the run (read only)
//! - the trail holding the current search path
//! - the exceptional curves found so far
//! - statistics
//!
//! Each SearchContext is independent, so separate searches can run side by
//! side without sharing anything.

pub mod config;

pub use config::{ArcCriterion, SearchConfig};

use crate::state::{ExceptionalCurves, Node, Statistics};
use crate::trail::Trail;

#[derive(Debug)]
pub struct SearchContext {
    pub config: SearchConfig,
    /// The current search path.
    pub trail: Trail,
    pub curves: ExceptionalCurves,
    pub statistics: Statistics,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            trail: Trail::new(),
            curves: ExceptionalCurves::new(),
            statistics: Statistics::new(),
        }
    }

    /// The node at the end of the current search path.
    pub fn current(&self) -> Option<&Node> {
        self.trail.top()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
