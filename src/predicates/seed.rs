// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SeedPredicate - chooses the number of marked points the curve starts with.
//!
//! Every search path starts from an empty curve extended by `n` marked
//! points, for each `n` in `SearchConfig::seed_sizes()`.

use tracing::{info, warn};

use super::grow::{assess, Assessment};
use crate::context::SearchContext;
use crate::diagram::Diagram;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Action, Counters, Node};

/// Pushes one seed node per choice.
///
/// Seeds are assessed like any other node, so a seed that is already
/// exceptional or pruned never reaches the next predicate.
#[derive(Debug)]
pub struct SeedPredicate;

impl Predicate for SeedPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.config.seed_sizes().len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let points = (ctx.config.min_initial_points + choice) as u32;
        let diagram = match Diagram::with_marked_points(points) {
            Ok(diagram) => diagram,
            Err(err) => {
                warn!(points, kind = err.kind(), "cannot seed: {}", err);
                ctx.statistics.record_failure(&err);
                return PredicateResult::Failure;
            }
        };
        ctx.statistics.increment_counter(Counters::Seeds);
        info!(points, found = ctx.curves.len(), "seeding search");

        let action = Action::Extend(points);
        match assess(diagram, ctx) {
            Assessment::Expand(diagram) => {
                ctx.trail.push(Node::new(diagram, action));
                PredicateResult::Success
            }
            Assessment::Pruned | Assessment::Exceptional => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Seed"
    }
}
