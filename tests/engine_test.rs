// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The engine driving the real predicates.

use exceptional_curves::context::{ArcCriterion, SearchConfig, SearchContext};
use exceptional_curves::engine::EngineBuilder;
use exceptional_curves::predicates::{FailPredicate, GrowPredicate, SeedPredicate, SuspendPredicate};
use exceptional_curves::state::{Action, Counters};

#[test]
fn test_suspend_after_each_seed() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(SeedPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut engine = engine.search(&mut ctx);
    let mut seeds = Vec::new();
    while let Some(suspended) = engine {
        assert_eq!(ctx.trail.len(), 1);
        let node = ctx.current().unwrap();
        seeds.push((node.last_action, node.diagram.gauss_code().labels().to_vec()));
        engine = suspended.resume(&mut ctx);
    }

    assert_eq!(
        seeds,
        vec![
            (Action::Extend(3), vec![1, 2, 3]),
            (Action::Extend(4), vec![1, 2, 3, 4]),
            (Action::Extend(5), vec![1, 2, 3, 4, 5]),
        ]
    );
    assert_eq!(ctx.statistics.get(Counters::Seeds), 3);
}

#[test]
fn test_trail_is_empty_after_exhaustive_search() {
    let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(4);
    let mut ctx = SearchContext::new(config);
    let engine = EngineBuilder::new()
        .add(Box::new(SeedPredicate))
        .add(Box::new(GrowPredicate::new()))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.trail.len() <= 1);
    assert_eq!(ctx.statistics.get(Counters::Nodes), 19);
    assert!(ctx.curves.is_empty());
}

#[test]
fn test_separate_contexts_do_not_interfere() {
    let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(4);
    let run = || {
        let mut ctx = SearchContext::new(config);
        let engine = EngineBuilder::new()
            .add(Box::new(SeedPredicate))
            .add(Box::new(GrowPredicate::new()))
            .terminal(Box::new(FailPredicate))
            .build();
        let _ = engine.search(&mut ctx);
        ctx.statistics
    };
    let first = run();
    let second = run();
    assert_eq!(first.get(Counters::Nodes), second.get(Counters::Nodes));
    assert_eq!(first.to_string(), second.to_string());
}
