// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the curve search.
//!
//! The trail is the current search path: a stack of nodes, each holding a
//! complete diagram. Moving forward pushes a node built from a copy of the
//! top one; backtracking truncates the stack. Nothing is restored in place,
//! so sibling branches never see each other's changes.

use crate::state::Node;

/// The trail: the search path from a seed to the current diagram.
///
/// # Memory Model
///
/// - Each SearchContext owns its own trail for independent searches
/// - A checkpoint is simply a trail length, recorded by the engine
#[derive(Debug, Default)]
pub struct Trail {
    /// Nodes on the current path, seed first.
    nodes: Vec<Node>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Extend the path by one node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// The node at the end of the path.
    pub fn top(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Drop every node beyond the checkpoint `len`.
    pub fn rewind_to(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Get the current number of nodes on the trail.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes on the current path, seed first.
    pub fn path(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
