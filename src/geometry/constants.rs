// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the curve search.
//!
//! The search looks for closed curves that lack a simple arc of a given
//! size. The two sizes below are the ones under investigation: without
//! flypes a simple arc of 6 double points is required, with flypes a
//! simple arc of 8.

/// Simple arc size tested when curves are taken as they are.
pub const SIMPLE_ARC_SIZE_NO_FLYPES: usize = 6;

/// Simple arc size tested when flypes may be applied first.
pub const SIMPLE_ARC_SIZE_WITH_FLYPES: usize = 8;

/// Smallest number of marked points a search is seeded with.
///
/// A curve with fewer than three double points is either simple or
/// reducible, so nothing smaller is worth seeding.
pub const MIN_INITIAL_POINTS: usize = 3;
