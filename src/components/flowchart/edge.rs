use leptos::prelude::*;

use super::geometry::{EDGE_LABEL_HEIGHT, EDGE_LABEL_WIDTH, EdgeGeometry, label_anchor};

/// One directed edge: an SVG path with an arrowhead at the terminal end and,
/// when labeled, a filled chip at the midpoint so the text stays legible
/// over crossing lines. Expects an `#arrowhead` marker in the canvas defs.
#[component]
pub fn FlowchartEdge(
	/// Source endpoint in logical coordinates.
	source: (f64, f64),
	/// Target endpoint in logical coordinates.
	target: (f64, f64),
	/// Branch label, if any.
	#[prop(default = None)]
	label: Option<String>,
) -> impl IntoView {
	let path = EdgeGeometry::between(source, target).to_path();
	let (lx, ly) = label_anchor(source, target);

	view! {
		<g class="flowchart-edge">
			<path d=path fill="none" stroke="black" stroke-width="2" marker-end="url(#arrowhead)" />
			{label.map(|text| {
				let (chip_x, chip_y) = (-EDGE_LABEL_WIDTH / 2.0, -EDGE_LABEL_HEIGHT / 2.0);
				view! {
					<g transform=format!("translate({lx}, {ly})")>
						<rect
							x=chip_x
							y=chip_y
							width=EDGE_LABEL_WIDTH
							height=EDGE_LABEL_HEIGHT
							fill="white"
							rx="4"
						/>
						<text x="0" y="4" text-anchor="middle" class="edge-label">
							{text}
						</text>
					</g>
				}
			})}
		</g>
	}
}
