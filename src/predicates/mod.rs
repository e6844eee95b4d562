// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the curve search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `seed`: SeedPredicate, choosing the initial number of marked points
//! - `grow`: GrowPredicate, extending the curve one action at a time
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod grow;
pub mod seed;

pub use grow::{Assessment, GrowPredicate};
pub use seed::SeedPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Ends every search path without success, forcing the engine to explore
/// all alternatives. Results are collected as side effects on the way.
///
/// # Example
///
/// ```
/// use exceptional_curves::context::{ArcCriterion, SearchConfig, SearchContext};
/// use exceptional_curves::engine::EngineBuilder;
/// use exceptional_curves::predicates::{FailPredicate, GrowPredicate, SeedPredicate};
///
/// let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(4);
/// let mut ctx = SearchContext::new(config);
/// let engine = EngineBuilder::new()
///     .add(Box::new(SeedPredicate))
///     .add(Box::new(GrowPredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine with the search path intact, so the caller can look
/// at `ctx.trail` before resuming.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
