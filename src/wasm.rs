//! Bindings for the JavaScript presentation layer.

use js_sys::{Float64Array, Uint32Array};
use log::{info, Level as LogLevel};
use wasm_bindgen::prelude::*;

use crate::builder::LevelBuilder;
use crate::geometry::quadratic_point;
use crate::level::Difficulty;
use crate::levels;
use crate::point::Point;
use crate::solver::find_eulerian_trail;

/// Route `log` output to the browser console and panics to `console.error`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    let _ = console_log::init_with_level(LogLevel::Debug);
    console_error_panic_hook::set_once();
    info!("logging initialized");
}

/// Number of levels in the built-in pack.
#[wasm_bindgen(js_name = levelCount)]
pub fn level_count() -> usize {
    levels::count()
}

/// Hint trail for a built-in level, or `undefined` if the index is out of range or no trail exists.
#[wasm_bindgen(js_name = solveLevel)]
pub fn solve_level(index: usize) -> Option<Uint32Array> {
    let level = levels::get(index)?.ok()?;
    find_eulerian_trail(&level).map(|trail| Uint32Array::from(trail.nodes()))
}

/// Hint trail for an ad hoc graph. Edge `i` joins `from[i]` and `to[i]`.
///
/// Throws if the graph is malformed; returns `undefined` if no trail exists.
#[wasm_bindgen(js_name = solveGraph)]
pub fn solve_graph(node_ids: &[u32], from: &[u32], to: &[u32]) -> Result<Option<Uint32Array>, JsError> {
    if from.len() != to.len() {
        return Err(JsError::new("edge endpoint arrays differ in length"));
    }

    let mut builder = LevelBuilder::new("custom", Difficulty::default());
    for id in node_ids {
        // positions do not matter to the solver
        builder.add_node(*id, Point::default());
    }
    for (a, b) in from.iter().zip(to) {
        builder.add_edge(*a, *b);
    }

    let level = builder.build()?;
    Ok(find_eulerian_trail(&level).map(|trail| Uint32Array::from(trail.nodes())))
}

/// Point on a quadratic Bézier curve at `t`, as `[x, y]`.
#[wasm_bindgen(js_name = quadraticPoint)]
#[allow(clippy::too_many_arguments)]
pub fn quadratic_point_js(sx: f64, sy: f64, cx: f64, cy: f64, ex: f64, ey: f64, t: f64) -> Float64Array {
    let point = quadratic_point(Point::new(sx, sy), Point::new(cx, cy), Point::new(ex, ey), t);
    Float64Array::from(&[point.x, point.y][..])
}
