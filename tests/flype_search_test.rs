// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The flype-aware search at its default length of 8.

mod common;

use common::assert_valid_outcome;
use exceptional_curves::context::{ArcCriterion, SearchConfig};
use exceptional_curves::search::find_exceptional_curves;
use exceptional_curves::state::Counters;

const EXPECTED: [&[u32]; 4] = [
    &[1, 2, 3, 4, 5, 1, 6, 3, 7, 5, 8, 6, 2, 7, 4, 8],
    &[1, 2, 3, 4, 5, 1, 6, 3, 7, 8, 4, 6, 2, 7, 8, 5],
    &[1, 2, 3, 4, 5, 1, 6, 7, 4, 8, 2, 6, 9, 5, 8, 3, 7, 9],
    &[1, 2, 3, 4, 5, 1, 6, 7, 2, 5, 8, 9, 7, 6, 10, 8, 4, 3, 9, 10],
];

#[test]
fn test_flype_search_at_eight() {
    let config = SearchConfig::new(ArcCriterion::WithFlypes);
    let outcome = find_exceptional_curves(&config);

    assert_valid_outcome(&outcome.curves, &config);
    let lengths: Vec<usize> = outcome.curves.iter().map(|c| c.len()).collect();
    assert_eq!(lengths, vec![16, 16, 18, 20]);
    for expected in EXPECTED {
        assert!(
            outcome.curves.iter().any(|c| c.is_equivalent(expected)),
            "missing {:?}",
            expected
        );
    }
    for curve in &outcome.curves {
        assert!(!curve.has_simple_arc_with_flypes(8));
    }

    let stats = &outcome.statistics;
    assert_eq!(stats.get(Counters::Seeds), 5);
    assert_eq!(stats.get(Counters::Nodes), 28937);
    assert_eq!(stats.get(Counters::Exceptional), 62);
    assert_eq!(stats.get(Counters::Duplicates), 58);
    assert_eq!(stats.failures(), 0);
}
