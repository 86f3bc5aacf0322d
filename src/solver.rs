use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::level::Level;
use crate::point::NodeId;
use crate::trail::Trail;

/// Ceilings on the work a [`TrailSolver`] may do.
///
/// Backtracking is exponential in the worst case. Authored levels stay far below these limits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverLimits {
    /// Levels with more edges than this are refused outright.
    pub max_edges: usize,
    /// Maximum number of edge traversals attempted across all start nodes.
    pub max_steps: usize,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_edges: 64,
            max_steps: 5_000_000,
        }
    }
}

/// Reasons a [`TrailSolver`] may fail.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum SolverFailure {
    /// Every candidate start node was exhausted; the level cannot be drawn in one stroke.
    #[error("no trail covers every edge exactly once")]
    NoSolutionFound,
    /// The level has more edges than [`SolverLimits::max_edges`].
    #[error("level has {edges} edges, more than the limit of {limit}")]
    TooLarge {
        /// Edges in the level.
        edges: usize,
        /// The configured ceiling.
        limit: usize,
    },
    /// The search gave up after [`SolverLimits::max_steps`] edge traversals.
    #[error("search gave up after {0} steps")]
    BudgetExhausted(usize),
}

// per start node; never shared between attempts
struct Search {
    visited: Vec<bool>,
    path: Vec<NodeId>,
}

/// Exhaustive backtracking search for a trail using every edge of a [`Level`] exactly once.
/// Use [`Self::solve`] to attempt to find one.
///
/// Start nodes are the nodes of odd degree in node order, or the first node of the level if there are none.
/// From each start, incident edges are tried in authoring order and the first complete trail wins, so the
/// result is deterministic for a given level.
pub struct TrailSolver<'a> {
    level: &'a Level,
    // incident edge indices per node position, in authoring order; a loop is listed twice
    adjacency: Vec<Vec<usize>>,
    limits: SolverLimits,
}

impl<'a> From<&'a Level> for TrailSolver<'a> {
    fn from(level: &'a Level) -> Self {
        let mut adjacency = vec![Vec::new(); level.nodes().len()];
        for (edge, (a, b)) in level.incidence().iter().enumerate() {
            adjacency[*a].push(edge);
            adjacency[*b].push(edge);
        }

        Self {
            level,
            adjacency,
            limits: SolverLimits::default(),
        }
    }
}

impl TrailSolver<'_> {
    /// Replace the default [`SolverLimits`].
    pub fn with_limits(mut self, limits: SolverLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Node positions the search starts from, in the order they are attempted.
    fn start_candidates(&self) -> Vec<usize> {
        let odd = self.adjacency.iter()
            .positions(|incident| incident.len() % 2 == 1)
            .collect_vec();

        if odd.is_empty() {
            // any node works for a circuit; fix the first for determinism
            vec![0]
        } else {
            odd
        }
    }

    #[inline]
    fn other_end(&self, edge: usize, from: usize) -> usize {
        let (a, b) = self.level.incidence()[edge];
        if a == from { b } else { a }
    }

    /// Find a trail through every edge, returning [`Ok`] with the [`Trail`] or [`Err`] with a [`SolverFailure`] reason.
    ///
    /// A level without edges yields the single-node trail of its first node.
    pub fn solve(&self) -> Result<Trail, SolverFailure> {
        let edge_count = self.level.edges().len();
        if edge_count > self.limits.max_edges {
            return Err(SolverFailure::TooLarge { edges: edge_count, limit: self.limits.max_edges });
        }
        if self.level.nodes().is_empty() {
            return Err(SolverFailure::NoSolutionFound);
        }

        let starts = self.start_candidates();
        debug!("solving {:?}: {} edges, starting from {:?}", self.level.name(), edge_count,
            starts.iter().map(|start| self.level.nodes()[*start].id).collect_vec());

        let mut steps = 0;
        for start in starts {
            let mut search = Search {
                visited: vec![false; edge_count],
                path: Vec::with_capacity(edge_count + 1),
            };
            search.path.push(self.level.nodes()[start].id);

            if self.extend(&mut search, start, &mut steps)? {
                debug!("found trail for {:?} after {} steps", self.level.name(), steps);
                return Ok(Trail::from(search.path));
            }
            trace!("start node {} exhausted after {} steps", self.level.nodes()[start].id, steps);
        }

        debug!("no trail for {:?} after {} steps", self.level.name(), steps);
        Err(SolverFailure::NoSolutionFound)
    }

    fn extend(&self, search: &mut Search, current: usize, steps: &mut usize) -> Result<bool, SolverFailure> {
        if search.path.len() == search.visited.len() + 1 {
            return Ok(true);
        }

        for &edge in &self.adjacency[current] {
            if search.visited[edge] {
                continue;
            }

            *steps += 1;
            if *steps > self.limits.max_steps {
                return Err(SolverFailure::BudgetExhausted(self.limits.max_steps));
            }

            let next = self.other_end(edge, current);
            search.visited[edge] = true;
            search.path.push(self.level.nodes()[next].id);

            if self.extend(search, next, steps)? {
                return Ok(true);
            }

            search.path.pop();
            search.visited[edge] = false;
        }

        Ok(false)
    }
}

/// Find a trail through `level` using every edge exactly once, with default [`SolverLimits`].
///
/// Returns [`None`] when no such trail is found, which is an ordinary outcome for disconnected levels
/// or levels with more than two nodes of odd degree.
pub fn find_eulerian_trail(level: &Level) -> Option<Trail> {
    TrailSolver::from(level).solve().ok()
}
