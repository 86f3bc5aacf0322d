#![warn(missing_docs)]

//! # `constellation`
//!
//! The engine of a one-stroke drawing puzzle: a level is a small constellation of stars joined by lines, and the
//! player must trace every line in one continuous stroke without lifting or retracing.
//! Build a level with a [`LevelBuilder`] (or take one from the built-in [`levels`] pack), then call
//! [`find_eulerian_trail`] to get the solution the "show solution" hint plays back.
//!
//! # Internals
//! A level is an undirected multigraph: parallel edges are separate strokes, and a line may curve through a
//! control point without affecting the puzzle. A solution is an Eulerian trail, which exists exactly when the
//! edges are connected and zero or two nodes have odd degree. When every degree is even the trail is a circuit
//! and always starts at the first node, so that node must lie on an edge.
//!
//! The solver is a plain backtracking search rather than Hierholzer's algorithm:
//! 1. Start from each odd-degree node in turn, or from the first node when every degree is even.
//! 2. From the current node try each unused incident edge in authoring order, marking it used and recursing.
//! 3. Stop at the first walk that uses every edge; unmark and try the next edge on a dead end.
//!
//! Levels have at most a few dozen edges and the search only runs when the player asks for a hint, so this is
//! fast enough, and the fixed edge order makes the hint the same every time. [`SolverLimits`] bounds the
//! work for anything larger.
//!
//! Around the solver sit [`HintPath`], which lays a trail out as curved segments and times the marker
//! animation, [`Trace`], which tracks the player's own stroke, and [`Session`], the game flow between screens.

pub use builder::{InvalidLevel, LevelBuilder, LevelError};
pub use hint::{HintPath, HintSegment, MarkerFrame};
pub use level::{Difficulty, Edge, Level, Node};
pub use point::{NodeId, Point};
pub use session::{Overlay, Screen, Session, SettingsView};
pub use solver::{find_eulerian_trail, SolverFailure, SolverLimits, TrailSolver};
pub use trace::{StepOutcome, Trace};
pub use trail::Trail;

pub mod builder;
pub mod geometry;
pub mod hint;
pub(crate) mod level;
pub mod levels;
pub(crate) mod point;
pub mod session;
pub(crate) mod solver;
mod tests;
pub(crate) mod trace;
pub(crate) mod trail;
#[cfg(feature = "wasm")]
pub mod wasm;
