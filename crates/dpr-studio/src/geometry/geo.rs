use super::{map_linear, Point};
use crate::datasets::{GeographicOutline, NodeRole, SupplyNode};
use serde::Serialize;
use std::collections::HashSet;

/// Latitude/longitude extent of an outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Extent of the outline's vertices, or `None` when it has none.
    pub fn of(outline: &GeographicOutline) -> Option<Self> {
        let mut vertices = outline.vertices().iter();
        let &(lat, lng) = vertices.next()?;
        let mut bounds = Self {
            min_lat: lat,
            max_lat: lat,
            min_lng: lng,
            max_lng: lng,
        };

        for &(lat, lng) in vertices {
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_lng = bounds.min_lng.min(lng);
            bounds.max_lng = bounds.max_lng.max(lng);
        }

        Some(bounds)
    }

    /// A zero-area box; everything projected through it lands mid-view.
    pub const fn collapsed() -> Self {
        Self {
            min_lat: 0.0,
            max_lat: 0.0,
            min_lng: 0.0,
            max_lng: 0.0,
        }
    }
}

/// Equirectangular projection of a bounding box onto a `width × height` view.
///
/// Longitude runs left to right and latitude is inverted so north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoProjector {
    bounds: BoundingBox,
    width: f64,
    height: f64,
}

impl GeoProjector {
    pub fn new(bounds: BoundingBox, width: f64, height: f64) -> Self {
        Self {
            bounds,
            width,
            height,
        }
    }

    pub fn for_outline(outline: &GeographicOutline, width: f64, height: f64) -> Self {
        let bounds = BoundingBox::of(outline).unwrap_or_else(BoundingBox::collapsed);
        Self::new(bounds, width, height)
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn project_point(&self, latitude: f64, longitude: f64) -> Point {
        let BoundingBox {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        } = self.bounds;

        Point::new(
            map_linear(longitude, min_lng, max_lng, 0.0, self.width),
            map_linear(latitude, min_lat, max_lat, self.height, 0.0),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedNode {
    pub district: String,
    pub role: NodeRole,
    pub throughput: f64,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub bounds: BoundingBox,
    pub outline_path: Vec<Point>,
    pub nodes: Vec<ProjectedNode>,
}

impl Projection {
    pub fn position(&self, district: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|node| node.district == district)
            .map(|node| node.position)
    }
}

/// Projects the outline and every node into the outline's own bounding box.
///
/// Nodes never widen the box, so ones outside the outline land outside the
/// view. Districts are unique keys; a repeated district keeps its first entry.
pub fn project(
    outline: &GeographicOutline,
    nodes: &[SupplyNode],
    view_width: f64,
    view_height: f64,
) -> Projection {
    let projector = GeoProjector::for_outline(outline, view_width, view_height);

    let outline_path = outline
        .vertices()
        .iter()
        .map(|&(lat, lng)| projector.project_point(lat, lng))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let nodes = nodes
        .iter()
        .filter(|node| seen.insert(node.district.as_str()))
        .map(|node| ProjectedNode {
            district: node.district.clone(),
            role: node.role,
            throughput: node.throughput,
            position: projector.project_point(node.latitude, node.longitude),
        })
        .collect();

    Projection {
        bounds: projector.bounds(),
        outline_path,
        nodes,
    }
}
