// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for exceptional immersed plane curves.
//!
//! An exceptional curve is a closed, irreducible curve in general position
//! whose Gauss code has no simple arc of a given size: no run of that many
//! consecutive crossings that are pairwise distinct. The search looks for
//! them at size 6 on curves as they are, and at size 8 when flypes may be
//! applied first.
//!
//! # Architecture
//!
//! ## Diagrams
//!
//! A diagram is an open curve being drawn, together with the faces
//! ("domains") it cuts the plane into:
//! - `geometry`: labels, domain boundaries and their surgery
//! - `gauss`: Gauss codes and the structural tests read off them
//! - `diagram`: the atlas of domains, the open edges, and the three
//!   building operations (extend, pass through a point, close)
//!
//! ## Search
//!
//! The search runs on a small non-deterministic engine:
//! - `engine`: predicates offering choices, with backtracking
//! - `trail`: the current search path, one diagram per node
//! - `predicates`: `SeedPredicate`, then `GrowPredicate` round after round,
//!   then `FailPredicate` to force exhaustive exploration
//! - `context`: configuration, trail, results and statistics of one run
//!
//! Every node owns its own diagram, so sibling branches never share state.
//!
//! # Example
//!
//! ```
//! use exceptional_curves::context::{ArcCriterion, SearchConfig};
//! use exceptional_curves::search::find_exceptional_curves;
//!
//! let config = SearchConfig::new(ArcCriterion::Plain).with_arc_length(5);
//! let outcome = find_exceptional_curves(&config);
//! assert!(outcome.curves.iter().all(|code| code.is_closed()));
//! ```

pub mod context;
pub mod diagram;
pub mod engine;
pub mod gauss;
pub mod geometry;
pub mod logging;
pub mod predicates;
pub mod report;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::{ArcCriterion, SearchConfig, SearchContext};
pub use diagram::Diagram;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use gauss::GaussCode;
pub use search::{find_exceptional_curves, SearchOutcome};
pub use trail::Trail;
