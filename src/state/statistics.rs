// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the search
//! predicates as they seed, grow, prune and record diagrams. Failed diagram
//! operations are counted per error kind after the named counters.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::geometry::{DiagramError, DiagramErrorKind};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Initial diagrams the search started from.
    Seeds,
    /// Diagrams built and assessed.
    Nodes,
    /// Pruned: cannot be completed to a closed curve.
    Incorrect,
    /// Pruned: already has the simple arc.
    ArcFound,
    /// Pruned: factors through a sub-loop.
    Reducible,
    /// Closed curves without the simple arc, before deduplication.
    Exceptional,
    /// Exceptional curves equivalent to one already recorded.
    Duplicates,
}

const COUNT: usize = Counters::COUNT + DiagramError::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a diagram operation that broke one of its preconditions.
    pub(crate) fn record_failure(&mut self, error: &DiagramError) {
        self.stats[Counters::COUNT + DiagramErrorKind::from(error) as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total failed diagram operations, over all error kinds.
    pub fn failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    /// Failed diagram operations of one kind.
    pub fn failures_of(&self, kind: DiagramErrorKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        write!(f, ", Failures={}", self.failures())
    }
}
