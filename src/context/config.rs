// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! What counts as "having a simple arc" is a strategy value, not a function
//! pointer: the search is run either on curves as they are, or on curves
//! after flypes.

use strum_macros::{Display, EnumIter};

use crate::diagram::Diagram;
use crate::geometry::{MIN_INITIAL_POINTS, SIMPLE_ARC_SIZE_NO_FLYPES, SIMPLE_ARC_SIZE_WITH_FLYPES};

/// The simple-arc test a curve must fail to be exceptional.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcCriterion {
    #[strum(serialize = "plain")]
    Plain,
    #[strum(serialize = "with flypes")]
    WithFlypes,
}

impl ArcCriterion {
    /// Whether `diagram` has a simple arc through `length` points.
    pub fn holds(self, diagram: &Diagram, length: usize) -> bool {
        match self {
            ArcCriterion::Plain => diagram.has_simple_arc(length),
            ArcCriterion::WithFlypes => diagram.has_simple_arc_with_flypes(length),
        }
    }

    /// The arc length under investigation for this criterion.
    pub fn default_length(self) -> usize {
        match self {
            ArcCriterion::Plain => SIMPLE_ARC_SIZE_NO_FLYPES,
            ArcCriterion::WithFlypes => SIMPLE_ARC_SIZE_WITH_FLYPES,
        }
    }
}

/// Parameters of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub criterion: ArcCriterion,
    /// Length of the simple arc looked for.
    pub arc_length: usize,
    /// Largest number of points a single `extend` adds.
    pub max_extension: u32,
    /// Seeds carry `min_initial_points .. arc_length` marked points.
    pub min_initial_points: usize,
}

impl SearchConfig {
    pub fn new(criterion: ArcCriterion) -> Self {
        let arc_length = criterion.default_length();
        Self {
            criterion,
            arc_length,
            max_extension: default_max_extension(arc_length),
            min_initial_points: MIN_INITIAL_POINTS,
        }
    }

    /// Change the arc length. The extension bound follows it.
    pub fn with_arc_length(mut self, arc_length: usize) -> Self {
        self.arc_length = arc_length;
        self.max_extension = default_max_extension(arc_length);
        self
    }

    pub fn with_max_extension(mut self, max_extension: u32) -> Self {
        self.max_extension = max_extension;
        self
    }

    /// Marked-point counts of the seed diagrams.
    pub fn seed_sizes(&self) -> std::ops::Range<usize> {
        self.min_initial_points..self.arc_length
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(ArcCriterion::Plain)
    }
}

fn default_max_extension(arc_length: usize) -> u32 {
    arc_length.saturating_sub(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults_per_criterion() {
        let plain = SearchConfig::new(ArcCriterion::Plain);
        assert_eq!(plain.arc_length, 6);
        assert_eq!(plain.max_extension, 5);
        assert_eq!(plain.seed_sizes(), 3..6);

        let flypes = SearchConfig::new(ArcCriterion::WithFlypes);
        assert_eq!(flypes.arc_length, 8);
        assert_eq!(flypes.max_extension, 7);
        assert_eq!(flypes.seed_sizes(), 3..8);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default().with_arc_length(4);
        assert_eq!(config.max_extension, 3);
        assert_eq!(config.with_max_extension(1).max_extension, 1);
        assert_eq!(config.with_max_extension(1).arc_length, 4);
    }

    #[test]
    fn test_criterion_names() {
        let names: Vec<String> = ArcCriterion::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["plain", "with flypes"]);
    }

    #[test]
    fn test_criterion_dispatch() {
        let mut trefoil = Diagram::with_marked_points(3).unwrap();
        for point in [1, 2, 3] {
            trefoil.pass_through(point).unwrap();
        }
        assert!(trefoil.close());
        for criterion in ArcCriterion::iter() {
            assert!(criterion.holds(&trefoil, criterion.default_length()));
        }
    }
}
