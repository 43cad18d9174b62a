//! Fixture parsing and the adjacency structure
//!
//! A fixture is plain text with one connection per line:
//!
//! ```text
//! London connects to Manchester by rail
//! ```
//!
//! Lines that don't follow this shape are skipped. Edges are stored exactly
//! as written: `A connects to B` does not imply `B connects to A`.

use std::collections::HashMap;
use std::path::Path;

use super::{Location, Mode};
use crate::common::{Error, Result};

const CONNECTS_TO: &str = " connects to ";
const BY: &str = " by ";

/// Directed multigraph of locations and the modes connecting them
///
/// Origins and each origin's destinations iterate in the order they first
/// appeared in the fixture.
#[derive(Debug, Default)]
pub struct Adjacency {
    origins: Vec<Location>,
    edges: HashMap<Location, Destinations>,
}

#[derive(Debug, Default)]
struct Destinations {
    order: Vec<Location>,
    modes: HashMap<Location, Vec<Mode>>,
}

impl Adjacency {
    /// Read and parse a fixture file
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| Error::fixture_unreadable(path, e))?;
        let adjacency = Self::parse(&text);
        tracing::debug!(
            path = %path.display(),
            origins = adjacency.origin_count(),
            edges = adjacency.edge_count(),
            "Parsed fixture"
        );
        Ok(adjacency)
    }

    /// Parse fixture text
    pub fn parse(text: &str) -> Self {
        let mut adjacency = Self::default();
        for (number, line) in text.lines().enumerate() {
            match parse_line(line) {
                Some((from, to, mode)) => adjacency.push(from, to, mode),
                None => tracing::trace!(line = number + 1, "Skipping non-connection line"),
            }
        }
        adjacency
    }

    fn push(&mut self, from: &str, to: &str, mode: Mode) {
        if !self.edges.contains_key(from) {
            let origin = Location::from(from);
            self.origins.push(origin.clone());
            self.edges.insert(origin, Destinations::default());
        }
        let Some(destinations) = self.edges.get_mut(from) else {
            return;
        };

        match destinations.modes.get_mut(to) {
            Some(modes) => modes.push(mode),
            None => {
                let destination = Location::from(to);
                destinations.order.push(destination.clone());
                destinations.modes.insert(destination, vec![mode]);
            }
        }
    }

    /// Locations with at least one outgoing edge, in fixture order
    pub fn origins(&self) -> impl Iterator<Item = &Location> {
        self.origins.iter()
    }

    pub fn origin_count(&self) -> usize {
        self.origins.len()
    }

    /// Total number of recorded edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges
            .values()
            .flat_map(|d| d.modes.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Out-neighbours of `from` with the modes recorded for each, in fixture order
    pub fn neighbours<'a>(
        &'a self,
        from: &str,
    ) -> impl Iterator<Item = (&'a Location, &'a [Mode])> + 'a {
        self.edges.get(from).into_iter().flat_map(|destinations| {
            destinations.order.iter().map(move |to| {
                let modes = destinations.modes.get(to).map(Vec::as_slice).unwrap_or(&[]);
                (to, modes)
            })
        })
    }

    /// Modes recorded directly from `from` to `to`, in fixture order
    pub fn modes(&self, from: &str, to: &str) -> &[Mode] {
        self.edges
            .get(from)
            .and_then(|destinations| destinations.modes.get(to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether at least one edge runs directly from `from` to `to`
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        !self.modes(from, to).is_empty()
    }
}

/// Split `<origin> connects to <destination> by <mode>`
///
/// Both names extend as far right as possible, so a name may itself
/// contain " connects to " as long as the line still ends in a mode.
fn parse_line(line: &str) -> Option<(&str, &str, Mode)> {
    let (head, token) = line.rsplit_once(BY)?;
    let mode = Mode::from_token(token)?;
    let (from, to) = head.rsplit_once(CONNECTS_TO)?;
    Some((from, to, mode))
}
