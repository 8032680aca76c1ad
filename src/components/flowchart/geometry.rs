//! Pure geometry for edge paths and node shapes. Everything here works in
//! logical (untransformed) coordinates; the viewport transform is applied
//! uniformly above this layer.

use super::types::NodeCategory;

/// Horizontal distance under which an edge is drawn as a straight segment
/// instead of a curve (in logical units).
pub const STRAIGHT_EPSILON: f64 = 2.0;

/// Width and height of the label chip rendered at an edge's midpoint.
pub const EDGE_LABEL_WIDTH: f64 = 32.0;
pub const EDGE_LABEL_HEIGHT: f64 = 20.0;

/// The drawable form of an edge between two endpoint coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeGeometry {
	/// Near-vertical alignment: a plain segment, no visually unnecessary
	/// curvature for the common top-to-bottom case.
	Line { sx: f64, sy: f64, tx: f64, ty: f64 },
	/// Branching: a cubic whose control points both sit at the vertical
	/// midpoint, one under the source, one over the target. Departs the
	/// source vertically and arrives at the target vertically.
	Cubic {
		sx: f64,
		sy: f64,
		tx: f64,
		ty: f64,
		mid_y: f64,
	},
}

impl EdgeGeometry {
	pub fn between(source: (f64, f64), target: (f64, f64)) -> Self {
		let (sx, sy) = source;
		let (tx, ty) = target;
		if (sx - tx).abs() < STRAIGHT_EPSILON {
			EdgeGeometry::Line { sx, sy, tx, ty }
		} else {
			EdgeGeometry::Cubic {
				sx,
				sy,
				tx,
				ty,
				mid_y: sy + (ty - sy) / 2.0,
			}
		}
	}

	/// SVG path data for this edge.
	pub fn to_path(self) -> String {
		match self {
			EdgeGeometry::Line { sx, sy, tx, ty } => format!("M {sx} {sy} L {tx} {ty}"),
			EdgeGeometry::Cubic { sx, sy, tx, ty, mid_y } => {
				format!("M {sx} {sy} C {sx} {mid_y}, {tx} {mid_y}, {tx} {ty}")
			}
		}
	}
}

/// Anchor point for an edge label: the arithmetic midpoint of the endpoints.
pub fn label_anchor(source: (f64, f64), target: (f64, f64)) -> (f64, f64) {
	((source.0 + target.0) / 2.0, (source.1 + target.1) / 2.0)
}

/// Outline drawn for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
	/// Fully rounded pill (terminators).
	Capsule,
	/// Rounded rectangle (process steps).
	RoundedRect,
	/// Rotated square rendered as a diamond (decisions).
	Diamond,
}

/// Shape and bounding-box size for a node category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMetrics {
	pub kind: ShapeKind,
	pub width: f64,
	pub height: f64,
}

impl ShapeMetrics {
	/// Fixed category-to-shape mapping. The match is exhaustive over the
	/// closed category set, so adding a variant fails to compile here.
	pub fn for_category(category: NodeCategory) -> Self {
		match category {
			NodeCategory::Start | NodeCategory::End => ShapeMetrics {
				kind: ShapeKind::Capsule,
				width: 180.0,
				height: 60.0,
			},
			NodeCategory::Process => ShapeMetrics {
				kind: ShapeKind::RoundedRect,
				width: 180.0,
				height: 60.0,
			},
			NodeCategory::Decision => ShapeMetrics {
				kind: ShapeKind::Diamond,
				width: 140.0,
				height: 100.0,
			},
		}
	}

	/// Top-left corner of the bounding box centered on `(x, y)`.
	pub fn top_left(self, x: f64, y: f64) -> (f64, f64) {
		(x - self.width / 2.0, y - self.height / 2.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn near_vertical_edges_are_straight() {
		let geom = EdgeGeometry::between((700.0, 50.0), (701.9, 150.0));
		assert!(matches!(geom, EdgeGeometry::Line { .. }));
		assert_eq!(geom.to_path(), "M 700 50 L 701.9 150");
	}

	#[test]
	fn branching_edges_curve_through_the_vertical_midpoint() {
		let geom = EdgeGeometry::between((700.0, 560.0), (1000.0, 560.0));
		match geom {
			EdgeGeometry::Cubic { mid_y, .. } => assert_eq!(mid_y, 560.0),
			other => panic!("expected cubic, got {other:?}"),
		}

		let geom = EdgeGeometry::between((700.0, 880.0), (400.0, 980.0));
		match geom {
			EdgeGeometry::Cubic { sx, tx, mid_y, .. } => {
				assert_eq!(mid_y, 930.0);
				// Control points stay under the source x and over the target x.
				assert_eq!(geom.to_path(), format!("M {sx} 880 C {sx} 930, {tx} 930, {tx} 980"));
			}
			other => panic!("expected cubic, got {other:?}"),
		}
	}

	#[test]
	fn epsilon_boundary_is_exclusive() {
		let exactly_two = EdgeGeometry::between((0.0, 0.0), (2.0, 100.0));
		assert!(matches!(exactly_two, EdgeGeometry::Cubic { .. }));
	}

	#[test]
	fn label_anchor_is_the_endpoint_midpoint() {
		assert_eq!(label_anchor((700.0, 560.0), (1000.0, 560.0)), (850.0, 560.0));
		assert_eq!(label_anchor((700.0, 560.0), (700.0, 680.0)), (700.0, 620.0));
	}

	#[test]
	fn category_shape_table() {
		let start = ShapeMetrics::for_category(NodeCategory::Start);
		let end = ShapeMetrics::for_category(NodeCategory::End);
		assert_eq!(start, end);
		assert_eq!(start.kind, ShapeKind::Capsule);
		assert_eq!((start.width, start.height), (180.0, 60.0));

		let process = ShapeMetrics::for_category(NodeCategory::Process);
		assert_eq!(process.kind, ShapeKind::RoundedRect);
		assert_eq!((process.width, process.height), (180.0, 60.0));

		let decision = ShapeMetrics::for_category(NodeCategory::Decision);
		assert_eq!(decision.kind, ShapeKind::Diamond);
		assert_eq!((decision.width, decision.height), (140.0, 100.0));
	}

	#[test]
	fn bounding_box_is_centered_on_the_node() {
		let m = ShapeMetrics::for_category(NodeCategory::Process);
		assert_eq!(m.top_left(700.0, 150.0), (610.0, 120.0));
	}
}
