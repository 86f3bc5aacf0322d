//! Turning a solved [`Trail`] into the path the "show solution" marker follows.
//!
//! The marker fades in on the first node, glides along each edge in turn with an in-out easing, pauses briefly
//! on every node it reaches, and fades out on the last one. [`HintPath::frame_at`] is a pure function of the
//! time elapsed since the hint started, so whoever drives the animation can stop sampling at any point to cancel it.

use std::time::Duration;

use thiserror::Error;

use crate::geometry::{ease_in_out_quad, quadratic_point};
use crate::level::Level;
use crate::point::{NodeId, Point};
use crate::trail::Trail;

/// Time for the marker to fade in on the starting node.
pub const FADE_IN: Duration = Duration::from_millis(300);
/// Time to travel along one edge.
pub const SEGMENT: Duration = Duration::from_millis(700);
/// Rest on each node reached before the next edge starts.
pub const PAUSE: Duration = Duration::from_millis(50);
/// Time for the marker to fade out on the final node.
pub const FADE_OUT: Duration = Duration::from_millis(500);

/// Reasons a [`Trail`] cannot be laid out over a [`Level`].
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum HintError {
    /// The trail is empty.
    #[error("trail visits no nodes")]
    EmptyTrail,
    /// The trail visits a node the level does not have.
    #[error("trail visits unknown node {0}")]
    UnknownNode(NodeId),
    /// The trail steps between two nodes more often than the level joins them.
    #[error("no unused edge joins {from} and {to}")]
    UnknownEdge {
        /// Node the step leaves.
        from: NodeId,
        /// Node the step arrives at.
        to: NodeId,
    },
}

/// One edge of the hint, oriented in travel direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HintSegment {
    /// Node the marker leaves.
    pub from: NodeId,
    /// Node the marker arrives at.
    pub to: NodeId,
    /// Index of the edge in [`Level::edges`].
    pub edge: usize,
    /// Position of `from`.
    pub start: Point,
    /// Bézier control point; equal to `start` for straight edges.
    pub control: Point,
    /// Position of `to`.
    pub end: Point,
}

impl HintSegment {
    /// Position after travelling the fraction `t` of this segment.
    pub fn point_at(&self, t: f64) -> Point {
        quadratic_point(self.start, self.control, self.end, t)
    }
}

/// Marker state at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerFrame {
    /// Where the marker is drawn.
    pub position: Point,
    /// From 0 (invisible) to 1 (opaque).
    pub opacity: f64,
}

/// The full hint animation for one trail.
#[derive(Clone, Debug, PartialEq)]
pub struct HintPath {
    origin: Point,
    segments: Vec<HintSegment>,
}

impl HintPath {
    /// Lay `trail` out over `level`.
    ///
    /// Each step is matched to the first edge joining its two nodes, in authoring order, that no earlier step
    /// has used. Parallel edges, which may curve differently, are thereby each drawn once.
    pub fn plan(level: &Level, trail: &Trail) -> Result<Self, HintError> {
        let position = |id: NodeId| level.node(id).map(|node| node.position).ok_or(HintError::UnknownNode(id));

        let origin = position(trail.start().ok_or(HintError::EmptyTrail)?)?;
        let mut used = vec![false; level.edges().len()];
        let mut segments = Vec::with_capacity(trail.len().saturating_sub(1));

        for (from, to) in trail.steps() {
            let (edge, curve) = level.edges_between(from, to)
                .find(|(index, _)| !used[*index])
                .map(|(index, edge)| (index, edge.curve))
                .ok_or(HintError::UnknownEdge { from, to })?;
            used[edge] = true;

            let start = position(from)?;
            segments.push(HintSegment {
                from,
                to,
                edge,
                start,
                control: curve.unwrap_or(start),
                end: position(to)?,
            });
        }

        Ok(Self { origin, segments })
    }

    /// Where the marker appears.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Segments in travel order.
    pub fn segments(&self) -> &[HintSegment] {
        &self.segments
    }

    /// Length of the whole animation, fades included.
    pub fn duration(&self) -> Duration {
        FADE_IN + (SEGMENT + PAUSE) * self.segments.len() as u32 + FADE_OUT
    }

    /// Marker state `elapsed` after the hint started, or [`None`] once the animation is over.
    pub fn frame_at(&self, elapsed: Duration) -> Option<MarkerFrame> {
        if elapsed < FADE_IN {
            return Some(MarkerFrame {
                position: self.origin,
                opacity: elapsed.as_secs_f64() / FADE_IN.as_secs_f64(),
            });
        }

        let travelling = elapsed - FADE_IN;
        let per_segment = SEGMENT + PAUSE;
        // overflow means far past the end of any hint
        let index = usize::try_from(travelling.as_nanos() / per_segment.as_nanos()).ok()?;

        if let Some(segment) = self.segments.get(index) {
            let local = travelling - per_segment * u32::try_from(index).ok()?;
            let position = if local < SEGMENT {
                segment.point_at(ease_in_out_quad(local.as_secs_f64() / SEGMENT.as_secs_f64()))
            } else {
                segment.end
            };

            return Some(MarkerFrame { position, opacity: 1.0 });
        }

        let fading = travelling - per_segment * self.segments.len() as u32;
        if fading < FADE_OUT {
            let position = self.segments.last().map_or(self.origin, |segment| segment.end);
            Some(MarkerFrame {
                position,
                opacity: 1.0 - fading.as_secs_f64() / FADE_OUT.as_secs_f64(),
            })
        } else {
            None
        }
    }

    /// Shorthand for the position part of [`Self::frame_at`].
    pub fn position_at(&self, elapsed: Duration) -> Option<Point> {
        self.frame_at(elapsed).map(|frame| frame.position)
    }
}
