use crate::datasets::{GeographicOutline, NodeRole, SupplyNode};
use crate::geometry::{build_path, project, BoundingBox, PathDescriptor, Point};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct NodeMarker {
    pub district: String,
    pub role: NodeRole,
    pub role_label: &'static str,
    pub throughput: f64,
    pub position: Point,
    /// False when the node sits outside the outline's bounding box.
    pub in_view: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub role: NodeRole,
    pub label: &'static str,
}

/// State outline and supply-chain nodes projected onto one drawing box.
#[derive(Debug, Clone, Serialize)]
pub struct GeoReachView {
    pub width: f64,
    pub height: f64,
    pub bounds: BoundingBox,
    pub outline: PathDescriptor,
    pub outline_svg: String,
    pub markers: Vec<NodeMarker>,
    pub legend: Vec<LegendEntry>,
}

impl GeoReachView {
    pub const DEFAULT_WIDTH: f64 = 420.0;
    pub const DEFAULT_HEIGHT: f64 = 360.0;

    pub fn build(
        outline: &GeographicOutline,
        nodes: &[SupplyNode],
        width: f64,
        height: f64,
    ) -> Self {
        let projection = project(outline, nodes, width, height);
        let path = build_path(projection.outline_path.iter().copied()).close();

        let markers: Vec<NodeMarker> = projection
            .nodes
            .into_iter()
            .map(|node| NodeMarker {
                role_label: node.role.label(),
                in_view: (0.0..=width).contains(&node.position.x)
                    && (0.0..=height).contains(&node.position.y),
                district: node.district,
                role: node.role,
                throughput: node.throughput,
                position: node.position,
            })
            .collect();

        debug!(
            vertices = outline.vertices().len(),
            markers = markers.len(),
            width,
            height,
            "built geo reach view"
        );

        Self {
            width,
            height,
            bounds: projection.bounds,
            outline_svg: path.to_svg(Some(2)),
            outline: path,
            markers,
            legend: NodeRole::ordered()
                .into_iter()
                .map(|role| LegendEntry {
                    role,
                    label: role.label(),
                })
                .collect(),
        }
    }

    pub fn with_default_box(outline: &GeographicOutline, nodes: &[SupplyNode]) -> Self {
        Self::build(outline, nodes, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    pub fn marker(&self, district: &str) -> Option<&NodeMarker> {
        self.markers.iter().find(|marker| marker.district == district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GeographicOutline {
        GeographicOutline::new(vec![(20.0, 80.0), (20.0, 82.0), (10.0, 82.0), (10.0, 80.0)])
    }

    fn node(district: &str, latitude: f64, longitude: f64, role: NodeRole) -> SupplyNode {
        SupplyNode {
            district: district.to_string(),
            latitude,
            longitude,
            role,
            throughput: 64.0,
        }
    }

    #[test]
    fn outline_path_is_closed_with_two_decimals() {
        let view = GeoReachView::build(&square(), &[], 420.0, 360.0);
        assert_eq!(
            view.outline_svg,
            "M 0.00 0.00 L 420.00 0.00 L 420.00 360.00 L 0.00 360.00 Z"
        );
        assert_eq!(view.outline.len(), 5);
    }

    #[test]
    fn markers_carry_role_labels_and_visibility() {
        let view = GeoReachView::with_default_box(
            &square(),
            &[
                node("Centre", 15.0, 81.0, NodeRole::ProcessingHub),
                node("Offshore", 15.0, 83.0, NodeRole::Distribution),
            ],
        );

        let centre = view.marker("Centre").expect("centre marker");
        assert_eq!(centre.role_label, "Processing Hub");
        assert_eq!(centre.position, Point::new(210.0, 180.0));
        assert!(centre.in_view);

        let offshore = view.marker("Offshore").expect("offshore marker");
        assert!(!offshore.in_view);
        assert!(offshore.position.x > view.width);
    }

    #[test]
    fn legend_lists_every_role_once() {
        let view = GeoReachView::with_default_box(&square(), &[]);
        let labels: Vec<&str> = view.legend.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Input Cluster", "Processing Hub", "Distribution"]);
    }

    #[test]
    fn empty_outline_renders_no_path() {
        let view = GeoReachView::build(
            &GeographicOutline::new(Vec::new()),
            &[node("Solo", 16.0, 80.0, NodeRole::InputCluster)],
            100.0,
            50.0,
        );
        assert!(view.outline.is_empty());
        assert_eq!(view.outline_svg, "");
        assert_eq!(view.markers[0].position, Point::new(50.0, 25.0));
    }
}
