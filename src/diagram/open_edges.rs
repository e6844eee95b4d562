// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Open edges: which domains each still-marked point lies between.
//!
//! Read as a graph, domains are vertices and every marked point is an edge
//! joining the (up to) two domains it borders.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::geometry::{DomainLabel, PointLabel};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenEdges {
    edges: BTreeMap<PointLabel, (DomainLabel, DomainLabel)>,
}

impl OpenEdges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get(&self, point: PointLabel) -> Option<(DomainLabel, DomainLabel)> {
        self.edges.get(&point).copied()
    }

    pub fn contains(&self, point: PointLabel) -> bool {
        self.edges.contains_key(&point)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointLabel, (DomainLabel, DomainLabel))> + '_ {
        self.edges.iter().map(|(p, e)| (*p, *e))
    }

    pub(crate) fn insert(&mut self, point: PointLabel, first: DomainLabel, second: DomainLabel) {
        self.edges.insert(point, (first, second));
    }

    pub(crate) fn remove(&mut self, point: PointLabel) -> Option<(DomainLabel, DomainLabel)> {
        self.edges.remove(&point)
    }

    /// Replace up to `sides` occurrences of `from` by `to` in the point's pair.
    pub(crate) fn repoint(&mut self, point: PointLabel, from: DomainLabel, to: DomainLabel, sides: usize) {
        if let Some((first, second)) = self.edges.get_mut(&point) {
            let mut left = sides;
            for side in [first, second] {
                if left > 0 && *side == from {
                    *side = to;
                    left -= 1;
                }
            }
        }
    }

    /// Whether every domain touched by a marked point can reach every other
    /// one through marked points. Vacuously true without marked points.
    pub fn is_connected(&self) -> bool {
        let mut graph: HashMap<DomainLabel, Vec<DomainLabel>> = HashMap::new();
        for &(a, b) in self.edges.values() {
            graph.entry(a).or_default().push(b);
            graph.entry(b).or_default().push(a);
        }
        let Some(&root) = graph.keys().next() else {
            return true;
        };

        let mut visited = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for &neighbour in &graph[&current] {
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
        visited.len() == graph.len()
    }
}
