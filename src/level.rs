use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;
use strum::{EnumString, VariantArray};
use unordered_pair::UnorderedPair;

use crate::point::{NodeId, Point};

/// How hard a level is billed as. Purely descriptive; the solver ignores it.
#[derive(Copy, Clone, Debug, Default, strum::Display, EnumString, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    /// Warm-up levels, mostly single loops.
    #[default]
    Easy,
    /// Curved edges and more junctions.
    Medium,
    /// Dense graphs with crossing triangles.
    Hard,
}

/// A star of the constellation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node {
    /// Identifier, unique within the level.
    pub id: NodeId,
    /// Normalized position, used only for drawing.
    pub position: Point,
}

/// One stroke the player must draw. Edges are undirected and parallel edges are distinct strokes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// The two nodes this edge joins. Both may be the same node.
    pub endpoints: UnorderedPair<NodeId>,
    /// Control point if this edge is drawn as a quadratic curve rather than a straight line.
    pub curve: Option<Point>,
}

impl Edge {
    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        self.endpoints == UnorderedPair(a, b)
    }

    /// The endpoint opposite `from`, if `from` is an endpoint at all.
    pub fn other_end(&self, from: NodeId) -> Option<NodeId> {
        let UnorderedPair(a, b) = self.endpoints;
        if a == from {
            Some(b)
        } else if b == from {
            Some(a)
        } else {
            None
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.endpoints.0 == self.endpoints.1
    }
}

/// A puzzle: an ordered list of nodes and an ordered multiset of edges.
///
/// [`Level`]s are immutable and can only be obtained from a [`LevelBuilder`](crate::builder::LevelBuilder),
/// which guarantees node ids are unique and every edge endpoint names a node of the level.
#[derive(Clone, Debug)]
pub struct Level {
    pub(crate) name: String,
    pub(crate) difficulty: Difficulty,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    // positions in `nodes` of each edge's endpoints, parallel to `edges`
    pub(crate) incidence: Vec<(usize, usize)>,
    pub(crate) index_of: HashMap<NodeId, usize>,
}

impl Level {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Billed difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Nodes in authoring order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in authoring order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index_of.get(&id).map(|index| &self.nodes[*index])
    }

    /// Every edge joining `a` and `b`, in authoring order.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> impl Iterator<Item = (usize, &Edge)> {
        self.edges.iter().enumerate().filter(move |(_, edge)| edge.joins(a, b))
    }

    pub(crate) fn incidence(&self) -> &[(usize, usize)] {
        &self.incidence
    }

    /// Number of edge ends at each node, in node order. A loop counts twice.
    pub fn degrees(&self) -> Vec<(NodeId, usize)> {
        let mut degrees = vec![0; self.nodes.len()];
        for (a, b) in &self.incidence {
            degrees[*a] += 1;
            degrees[*b] += 1;
        }

        self.nodes.iter().map(|node| node.id).zip(degrees).collect_vec()
    }

    /// Nodes of odd degree, in node order.
    pub fn odd_nodes(&self) -> Vec<NodeId> {
        self.degrees().into_iter()
            .filter(|(_, degree)| degree % 2 == 1)
            .map(|(id, _)| id)
            .collect_vec()
    }

    /// The level as a [`petgraph`] multigraph. Node weights are node ids, edge weights are indices into [`Self::edges`].
    pub fn graph(&self) -> UnGraph<NodeId, usize> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices = self.nodes.iter().map(|node| graph.add_node(node.id)).collect_vec();
        for (edge, (a, b)) in self.incidence.iter().enumerate() {
            graph.add_edge(indices[*a], indices[*b], edge);
        }

        graph
    }

    /// Whether every edge can be reached from every other edge. Isolated nodes are ignored.
    pub fn is_connected(&self) -> bool {
        let graph = self.graph();
        let touched: HashSet<NodeIndex> = graph.node_indices()
            .filter(|node| graph.neighbors(*node).next().is_some())
            .collect();

        let Some(start) = touched.iter().min().copied() else {
            // no edges at all
            return true;
        };

        let mut dfs = Dfs::new(&graph, start);
        let mut reached = 0;
        while let Some(node) = dfs.next(&graph) {
            if touched.contains(&node) {
                reached += 1;
            }
        }

        reached == touched.len()
    }

    /// Whether a trail through every edge exists starting where the solver starts: connected, with zero or two
    /// nodes of odd degree, and, for a circuit, with the first node on it.
    pub fn has_eulerian_trail(&self) -> bool {
        let degrees = self.degrees();
        match degrees.iter().filter(|(_, degree)| degree % 2 == 1).count() {
            // circuits always start at the first node
            0 => match degrees.first() {
                None => false,
                Some((_, 0)) => self.edges.is_empty(),
                Some(_) => self.is_connected(),
            },
            2 => self.is_connected(),
            _ => false,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {} nodes, {} edges", self.name, self.difficulty, self.nodes.len(), self.edges.len())
    }
}
