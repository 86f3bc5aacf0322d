use std::collections::HashMap;

use itertools::Itertools;
use log::warn;
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::level::{Difficulty, Edge, Level, Node};
use crate::point::{NodeId, Point};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum LevelError {
    /// Two nodes were given the same id.
    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeId),
    /// A node was placed outside the unit square.
    #[error("node {node} lies outside the board at {position}")]
    PositionOutOfRange {
        /// The misplaced node.
        node: NodeId,
        /// Where it was placed.
        position: Point,
    },
    /// A curved edge has its control point outside the unit square.
    #[error("curve of edge {from}-{to} has its control point outside the board at {control}")]
    ControlOutOfRange {
        /// One end of the edge.
        from: NodeId,
        /// The other end of the edge.
        to: NodeId,
        /// The offending control point.
        control: Point,
    },
    /// An edge names a node the level does not declare.
    #[error("edge {from}-{to} refers to missing node {missing}")]
    UnknownEndpoint {
        /// One end of the edge.
        from: NodeId,
        /// The other end of the edge.
        to: NodeId,
        /// Whichever end is not declared.
        missing: NodeId,
    },
    /// The level has no nodes.
    #[error("level has no nodes")]
    Empty,
}

/// A level which failed validation, with every reason found.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("level {name:?} is malformed: {}", .reasons.iter().join("; "))]
pub struct InvalidLevel {
    /// Name the level was being built under.
    pub name: String,
    /// What is wrong with it.
    pub reasons: Vec<LevelError>,
}

/// Chained construction of a [`Level`], validating the node/edge schema as it goes.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Edges may be added before the nodes they name; endpoints are resolved by [`Self::build`].
#[derive(Clone, Debug)]
pub struct LevelBuilder {
    name: String,
    difficulty: Difficulty,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    invalid_reasons: Vec<LevelError>,
}

impl LevelBuilder {
    /// Start an empty level.
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
            nodes: Default::default(),
            edges: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Add a node at a normalized `position`.
    ///
    /// May cause the builder to enter a [`DuplicateNode`](LevelError::DuplicateNode) invalid state if `id` is taken,
    /// or a [`PositionOutOfRange`](LevelError::PositionOutOfRange) invalid state if `position` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_node(&mut self, id: NodeId, position: impl Into<Point>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let position = position.into();
        if self.nodes.iter().any(|node| node.id == id) {
            self.invalid_reasons.push(LevelError::DuplicateNode(id));
            return self;
        }
        if !position.is_normalized() {
            self.invalid_reasons.push(LevelError::PositionOutOfRange { node: id, position });
            return self;
        }

        self.nodes.push(Node { id, position });
        self
    }

    /// Add a straight edge between `from` and `to`. Repeating a pair adds a parallel edge.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.edges.push(Edge { endpoints: UnorderedPair(from, to), curve: None });
        self
    }

    /// Add an edge between `from` and `to` drawn as a quadratic curve through `control`.
    ///
    /// May cause the builder to enter a [`ControlOutOfRange`](LevelError::ControlOutOfRange) invalid state if `control` is off the board.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_curve(&mut self, from: NodeId, to: NodeId, control: impl Into<Point>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let control = control.into();
        if !control.is_normalized() {
            self.invalid_reasons.push(LevelError::ControlOutOfRange { from, to, control });
            return self;
        }

        self.edges.push(Edge { endpoints: UnorderedPair(from, to), curve: Some(control) });
        self
    }

    /// Remove the most recently added edge.
    ///
    /// If the builder is in an invalid state or no edges are present, this function does nothing.
    pub fn pop_edge(&mut self) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.edges.pop();
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`LevelError`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid so far, `Some(&Vec<LevelError>)` otherwise.
    /// Dangling edge endpoints are only detected by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<LevelError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Level`].
    /// If the builder is invalid for any reason, an [`InvalidLevel`] lists why.
    pub fn build(&self) -> Result<Level, InvalidLevel> {
        let mut reasons = self.invalid_reasons.clone();
        if reasons.is_empty() && self.nodes.is_empty() {
            reasons.push(LevelError::Empty);
        }

        let index_of: HashMap<NodeId, usize> = self.nodes.iter()
            .enumerate()
            .map(|(index, node)| (node.id, index))
            .collect();

        let mut incidence = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let UnorderedPair(from, to) = edge.endpoints;
            match (index_of.get(&from), index_of.get(&to)) {
                (Some(a), Some(b)) => incidence.push((*a, *b)),
                (None, _) => reasons.push(LevelError::UnknownEndpoint { from, to, missing: from }),
                (_, None) => reasons.push(LevelError::UnknownEndpoint { from, to, missing: to }),
            }
        }

        if !reasons.is_empty() {
            let invalid = InvalidLevel { name: self.name.clone(), reasons };
            warn!("{invalid}");
            return Err(invalid);
        }

        Ok(Level {
            name: self.name.clone(),
            difficulty: self.difficulty,
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            incidence,
            index_of,
        })
    }
}
