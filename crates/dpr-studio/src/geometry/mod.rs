//! Drawing primitives derived from plain numeric data.

pub mod geo;
pub mod path;
pub mod pie;
pub mod scale;

pub use geo::{project, BoundingBox, GeoProjector, ProjectedNode, Projection};
pub use path::{build_path, PathCommand, PathDescriptor};
pub use pie::{slice, PieSlice, SliceError, START_ANGLE};
pub use scale::{map_linear, LinearScale};

use serde::{Deserialize, Serialize};

/// A position in drawing space. `y` grows downwards, matching SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub(crate) fn format_coordinate(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}
