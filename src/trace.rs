use std::collections::HashMap;

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::level::Level;
use crate::point::NodeId;

/// What happened when the stroke was dragged onto a node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// A new edge was drawn.
    Extended,
    /// A new edge was drawn and it was the last one; the level is won.
    Completed,
    /// No edge joins the current node and the target.
    NotAdjacent,
    /// Every edge joining the current node and the target is already drawn.
    Exhausted,
    /// The target is the node the stroke is already on.
    SameNode,
    /// There is no stroke in progress, or the level is already complete.
    NotDrawing,
}

/// The player's stroke over one level.
///
/// An edge between two nodes may be drawn as many times as the level has edges between them, in either direction.
#[derive(Clone, Debug)]
pub struct Trace {
    available: HashMap<UnorderedPair<NodeId>, usize>,
    drawn: HashMap<UnorderedPair<NodeId>, usize>,
    strokes: Vec<UnorderedPair<NodeId>>,
    total: usize,
    current: Option<NodeId>,
}

impl Trace {
    /// A fresh, empty stroke over `level`.
    pub fn new(level: &Level) -> Self {
        Self {
            available: level.edges().iter().map(|edge| edge.endpoints).counts(),
            drawn: HashMap::new(),
            strokes: Vec::new(),
            total: level.edges().len(),
            current: None,
        }
    }

    /// Put the finger down on `node`, discarding any unfinished stroke.
    /// Does nothing once the level is complete.
    pub fn begin(&mut self, node: NodeId) {
        if self.is_complete() {
            return;
        }

        self.clear();
        self.current = Some(node);
    }

    /// Drag the stroke onto `node`.
    pub fn step_to(&mut self, node: NodeId) -> StepOutcome {
        let Some(current) = self.current else {
            return StepOutcome::NotDrawing;
        };
        if self.is_complete() {
            return StepOutcome::NotDrawing;
        }
        if current == node {
            return StepOutcome::SameNode;
        }

        let pair = UnorderedPair(current, node);
        let available = self.available.get(&pair).copied().unwrap_or(0);
        if available == 0 {
            return StepOutcome::NotAdjacent;
        }

        let drawn = self.drawn.entry(pair).or_insert(0);
        if *drawn >= available {
            return StepOutcome::Exhausted;
        }

        *drawn += 1;
        self.strokes.push(pair);
        self.current = Some(node);

        if self.is_complete() {
            StepOutcome::Completed
        } else {
            StepOutcome::Extended
        }
    }

    /// Lift the finger. An unfinished stroke is discarded; a complete one is kept.
    pub fn release(&mut self) {
        if !self.is_complete() {
            self.clear();
        }
        self.current = None;
    }

    fn clear(&mut self) {
        self.drawn.clear();
        self.strokes.clear();
        self.current = None;
    }

    /// The node the stroke currently ends on.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Edges drawn so far, in drawing order.
    pub fn visited_edges(&self) -> &[UnorderedPair<NodeId>] {
        &self.strokes
    }

    /// Whether every edge of the level has been drawn.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.strokes.len() == self.total
    }

    /// Fraction of edges drawn, from 0 to 1.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.strokes.len() as f64 / self.total as f64
    }
}
