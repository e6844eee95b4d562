// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GrowPredicate - grows the curve at the end of the search path.
//!
//! Each round looks at the node on top of the trail and offers every legal
//! action as a choice:
//! - `Extend(k)` for `k` in `1..=max_extension`, only straight after a
//!   pass-through and when more than one way to continue exists
//! - `PassThrough(p)` for every available point `p`
//!
//! Each choice is applied to a copy of the top diagram, which is then
//! assessed. Only diagrams worth growing further are pushed on the trail.

use tracing::{debug, trace, warn};

use crate::context::SearchContext;
use crate::diagram::Diagram;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Action, Counters, Node};

/// What the search does with a freshly built diagram.
#[derive(Debug)]
pub enum Assessment {
    /// Grow it further.
    Expand(Diagram),
    /// Drop it; the reason has been counted.
    Pruned,
    /// A closed curve without the arc; it has been offered to the collector.
    Exceptional,
}

/// Decide the fate of a new diagram, updating statistics and results.
///
/// The checks run in this order:
/// 1. a diagram that cannot be completed is pruned
/// 2. a diagram that already has the arc is pruned
/// 3. a diagram that closes without the arc is exceptional
/// 4. a reducible diagram is pruned
pub(crate) fn assess(mut diagram: Diagram, ctx: &mut SearchContext) -> Assessment {
    let stats = &mut ctx.statistics;
    let criterion = ctx.config.criterion;
    let length = ctx.config.arc_length;
    stats.increment_counter(Counters::Nodes);

    let pruned = if !diagram.check_correctness() {
        Some(Counters::Incorrect)
    } else if criterion.holds(&diagram, length) {
        Some(Counters::ArcFound)
    } else if diagram.close() {
        if criterion.holds(&diagram, length) {
            Some(Counters::ArcFound)
        } else {
            stats.increment_counter(Counters::Exceptional);
            if ctx.curves.record(diagram.gauss_code()) {
                debug!(code = %diagram.gauss_code(), "exceptional curve");
            } else {
                stats.increment_counter(Counters::Duplicates);
                debug!(code = %diagram.gauss_code(), "equivalent curve already known");
            }
            return Assessment::Exceptional;
        }
    } else if !diagram.check_irreducibility() {
        Some(Counters::Reducible)
    } else {
        None
    };

    match pruned {
        Some(reason) => {
            stats.increment_counter(reason);
            trace!(code = %diagram.gauss_code(), ?reason, "pruned");
            Assessment::Pruned
        }
        None => Assessment::Expand(diagram),
    }
}

/// Every action the search may take from `node`, extensions first.
pub fn legal_actions(node: &Node, max_extension: u32) -> Vec<Action> {
    let available = node.diagram.available_points();
    let mut actions = Vec::with_capacity(available.len() + max_extension as usize);
    if matches!(node.last_action, Action::PassThrough(_)) && !node.diagram.is_unique_continuation() {
        actions.extend((1..=max_extension).map(Action::Extend));
    }
    actions.extend(available.into_iter().map(Action::PassThrough));
    actions
}

/// Grows the top node by one action per round.
///
/// The actions offered at each round are kept until the engine backtracks
/// below that round.
#[derive(Debug, Default)]
pub struct GrowPredicate {
    plans: Vec<Vec<Action>>,
}

impl GrowPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for GrowPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let Some(node) = ctx.current() else {
            return PredicateResult::Failure;
        };
        let actions = legal_actions(node, ctx.config.max_extension);
        self.plans.truncate(round);
        self.plans.push(actions);
        match self.plans[round].len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let Some(&action) = self.plans.get(round).and_then(|plan| plan.get(choice)) else {
            return PredicateResult::Failure;
        };
        let Some(parent) = ctx.current() else {
            return PredicateResult::Failure;
        };
        let mut diagram = parent.diagram.clone();
        let applied = match action {
            Action::Extend(count) => diagram.extend(count),
            Action::PassThrough(point) => diagram.pass_through(point),
        };
        if let Err(err) = applied {
            warn!(%action, code = %diagram.gauss_code(), kind = err.kind(), "dropping branch: {}", err);
            ctx.statistics.record_failure(&err);
            return PredicateResult::Failure;
        }

        match assess(diagram, ctx) {
            Assessment::Expand(diagram) => {
                ctx.trail.push(Node::new(diagram, action));
                PredicateResult::SuccessSamePredicate
            }
            Assessment::Pruned | Assessment::Exceptional => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Grow"
    }
}
