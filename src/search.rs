// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The curve search, end to end.

use std::time::Instant;

use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::context::{SearchConfig, SearchContext};
use crate::engine::EngineBuilder;
use crate::gauss::GaussCode;
use crate::geometry::DiagramErrorKind;
use crate::predicates::{FailPredicate, GrowPredicate, SeedPredicate};
use crate::state::Statistics;

/// Everything a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub config: SearchConfig,
    /// One code per equivalence class, by ascending length.
    pub curves: Vec<GaussCode>,
    pub statistics: Statistics,
}

/// Run the search to exhaustion.
///
/// The program is `Seed, Grow, Fail`: every path is explored and fails in
/// the end, and exceptional curves are collected on the way.
pub fn find_exceptional_curves(config: &SearchConfig) -> SearchOutcome {
    let mut ctx = SearchContext::new(*config);
    let engine = EngineBuilder::new()
        .add(Box::new(SeedPredicate))
        .add(Box::new(GrowPredicate::new()))
        .terminal(Box::new(FailPredicate))
        .build();

    info!(
        criterion = %config.criterion,
        arc_length = config.arc_length,
        max_extension = config.max_extension,
        "starting search"
    );
    let started = Instant::now();
    let suspended = engine.search(&mut ctx);
    debug_assert!(suspended.is_none(), "a Fail-terminated program never suspends");

    info!(
        found = ctx.curves.len(),
        elapsed = ?started.elapsed(),
        "search complete: {}",
        ctx.statistics
    );
    for kind in DiagramErrorKind::iter() {
        let count = ctx.statistics.failures_of(kind);
        if count > 0 {
            let name: &'static str = kind.into();
            warn!(kind = name, count, "branches dropped on a broken precondition");
        }
    }
    SearchOutcome {
        config: *config,
        curves: ctx.curves.into_sorted(),
        statistics: ctx.statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ArcCriterion;
    use crate::state::Counters;

    #[test]
    fn test_search_without_seeds_finds_nothing() {
        let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(3);
        let outcome = find_exceptional_curves(&config);
        assert!(outcome.curves.is_empty());
        assert_eq!(outcome.statistics.get(Counters::Seeds), 0);
    }

    #[test]
    fn test_small_search_visits_every_seed() {
        let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(4);
        let outcome = find_exceptional_curves(&config);
        assert_eq!(outcome.statistics.get(Counters::Seeds), 1);
        assert!(outcome.statistics.get(Counters::Nodes) > 1);
        assert_eq!(outcome.statistics.failures(), 0);
        assert_eq!(outcome.config, config);
    }
}
