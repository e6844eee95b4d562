// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use exceptional_curves::context::SearchConfig;
use exceptional_curves::gauss::GaussCode;
use exceptional_curves::Diagram;

/// Build a diagram from a fresh curve with `points` marked points, then
/// pass through each of `path` in turn.
pub fn walk(points: u32, path: &[i32]) -> Diagram {
    let mut diagram = Diagram::with_marked_points(points).unwrap();
    for &point in path {
        diagram
            .pass_through(point)
            .unwrap_or_else(|err| panic!("pass_through({}) failed: {}", point, err));
    }
    diagram
}

/// Every seam must have exactly one twin, on the domain it names, naming it back.
pub fn assert_seams_paired(diagram: &Diagram) {
    for domain in diagram.atlas().iter() {
        for (seam, neighbour) in domain.seams() {
            let twins: Vec<_> = diagram.atlas()[neighbour]
                .seams()
                .filter(|(label, _)| *label == seam)
                .collect();
            assert_eq!(
                twins,
                vec![(seam, domain.label())],
                "seam {} of {} is not paired",
                seam.value(),
                domain.label()
            );
        }
    }
}

/// The properties every reported curve has, whatever the search found.
pub fn assert_valid_outcome(curves: &[GaussCode], config: &SearchConfig) {
    for code in curves {
        assert!(code.is_closed(), "{} is not closed", code);
        assert_eq!(code.len() % 2, 0, "{} has odd length", code);
        assert!(code.len() >= 2 * config.min_initial_points, "{} is too short", code);
        assert_eq!(code.len(), 2 * code.points(), "{} has marked points left", code);
        assert!(!code.has_odd_loop(), "{} has an odd loop", code);
    }
    for pair in curves.windows(2) {
        assert!(pair[0].len() <= pair[1].len(), "curves are not sorted by length");
    }
    for (i, a) in curves.iter().enumerate() {
        for b in &curves[i + 1..] {
            assert!(!a.is_equivalent(b.labels()), "{} and {} are equivalent", a, b);
        }
    }
}
