use std::fmt::{Display, Formatter};

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::level::Level;
use crate::point::NodeId;

/// A walk through a level, as the sequence of nodes visited.
///
/// A trail produced by the [`TrailSolver`](crate::solver::TrailSolver) has one more node than the level has edges,
/// and its consecutive pairs use each edge of the level exactly once.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Trail(Vec<NodeId>);

impl From<Vec<NodeId>> for Trail {
    fn from(value: Vec<NodeId>) -> Self {
        Self(value)
    }
}

impl From<Trail> for Vec<NodeId> {
    fn from(value: Trail) -> Self {
        value.0
    }
}

impl Trail {
    /// The visited nodes in order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of nodes visited, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no node is visited at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first node.
    pub fn start(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    /// The last node.
    pub fn end(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Whether the trail returns to where it started.
    pub fn is_circuit(&self) -> bool {
        !self.is_empty() && self.start() == self.end()
    }

    /// Consecutive node pairs, i.e. the strokes of this trail in drawing order.
    pub fn steps(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.0.iter().copied().tuple_windows()
    }

    /// Whether this trail draws every edge of `level` exactly once and nothing else.
    pub fn covers(&self, level: &Level) -> bool {
        if self.is_empty() || self.0.iter().any(|node| level.node(*node).is_none()) {
            return false;
        }

        let drawn = self.steps().map(UnorderedPair::from).counts();
        let required = level.edges().iter().map(|edge| edge.endpoints).counts();

        drawn == required
    }
}

impl Display for Trail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}
