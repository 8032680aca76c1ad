use leptos::prelude::*;

use super::geometry::{ShapeKind, ShapeMetrics};
use super::types::Node;

/// One workflow step, absolutely positioned so its shape is centered on the
/// node's logical coordinate. Shape follows the category lookup table;
/// selection inverts the colors and enlarges the shape about its own center.
///
/// The entrance animation staggers by vertical position. The click handler
/// is attached at mount, so a node is selectable while it is still fading in.
#[component]
pub fn FlowchartNode(
	node: Node,
	#[prop(into)] is_selected: Signal<bool>,
	on_select: Callback<Node>,
) -> impl IntoView {
	let metrics = ShapeMetrics::for_category(node.category);
	let (left, top) = metrics.top_left(node.x, node.y);
	let shape_class = match metrics.kind {
		ShapeKind::Capsule => "capsule",
		ShapeKind::RoundedRect => "rounded",
		ShapeKind::Diamond => "diamond",
	};
	let enter_delay = node.y / 1000.0;

	let label = node.label.clone();
	let clicked = node.clone();
	view! {
		<div
			class="flowchart-node"
			style=format!(
				"left: {left}px; top: {top}px; width: {}px; height: {}px; animation-delay: {enter_delay}s;",
				metrics.width,
				metrics.height,
			)
		>
			<div
				class=move || {
					let selected = if is_selected.get() { " selected" } else { "" };
					format!("node-shape {shape_class}{selected}")
				}
				on:click=move |_| on_select.run(clicked.clone())
			>
				<span class="node-label">{label}</span>
			</div>
		</div>
	}
}
