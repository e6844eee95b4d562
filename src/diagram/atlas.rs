// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The atlas: an arena of every domain a diagram has created.
//!
//! Domains are addressed by label, never by reference, and are never
//! removed. Cloning an atlas is a full value copy.

use std::ops::{Index, IndexMut};

use crate::geometry::{DiagramError, Domain, DomainLabel, SeamLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    domains: Vec<Domain>,
}

impl Atlas {
    /// An atlas holding only the initial domain `[Start, End]`.
    pub fn new() -> Self {
        Self {
            domains: vec![Domain::initial()],
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The label the next created domain will get.
    pub fn next_label(&self) -> DomainLabel {
        DomainLabel::new(self.domains.len())
    }

    /// Add a domain built outside the arena. Its label must be `next_label()`.
    pub(crate) fn push(&mut self, domain: Domain) -> DomainLabel {
        debug_assert_eq!(domain.label(), self.next_label());
        let label = domain.label();
        self.domains.push(domain);
        label
    }

    pub fn iter(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter()
    }

    /// Scan for the domains carrying the end of the curve.
    pub fn domains_with_endpoint(&self) -> impl Iterator<Item = DomainLabel> + '_ {
        self.domains
            .iter()
            .filter(|d| d.contains_endpoint())
            .map(Domain::label)
    }

    /// Point the twins of every seam on `moved` back at `moved`.
    ///
    /// Called after a pass-through: seams carried into a new domain still
    /// have twins naming the domain they came from.
    pub(crate) fn repoint_seams_of(&mut self, moved: DomainLabel) -> Result<(), DiagramError> {
        let seams: Vec<(SeamLabel, DomainLabel)> = self[moved].seams().collect();
        for (seam, neighbour) in seams {
            self[neighbour].repoint_seam(seam, moved)?;
        }
        Ok(())
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<DomainLabel> for Atlas {
    type Output = Domain;

    fn index(&self, label: DomainLabel) -> &Domain {
        &self.domains[label.as_usize()]
    }
}

impl IndexMut<DomainLabel> for Atlas {
    fn index_mut(&mut self, label: DomainLabel) -> &mut Domain {
        &mut self.domains[label.as_usize()]
    }
}
