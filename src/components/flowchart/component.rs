use leptos::prelude::*;

use super::detail_panel::DetailPanel;
use super::edge::FlowchartEdge;
use super::node::FlowchartNode;
use super::selection::Selection;
use super::types::{FlowchartData, Node};
use super::viewport::Viewport;

/// Logical size of the canvas layer. Kept larger than any viewport so the
/// surrounding container's native scrolling can reach all content.
const CANVAS_WIDTH: f64 = 2000.0;
const CANVAS_HEIGHT: f64 = 1600.0;

/// Zoom change per toolbar click.
const ZOOM_STEP: f64 = 0.1;

/// The interactive flowchart: an SVG edge underlay and a node layer
/// composited under one scale+translate transform, a zoom toolbar, and the
/// detail panel for the selected step.
///
/// Clicking the canvas background never clears the selection; only the
/// panel's close control does.
#[component]
pub fn FlowchartCanvas(#[prop(into)] data: Signal<FlowchartData>) -> impl IntoView {
	let viewport = RwSignal::new(Viewport::default());
	let selection = RwSignal::new(Selection::default());

	let on_select = Callback::new(move |node: Node| {
		selection.update(|s| s.select(node));
	});

	let edges = move || {
		let data = data.get();
		data.resolved_edges()
			.into_iter()
			.map(|(edge, src, tgt)| {
				view! {
					<FlowchartEdge
						source=(src.x, src.y)
						target=(tgt.x, tgt.y)
						label=edge.label.clone()
					/>
				}
			})
			.collect_view()
	};

	let nodes = move || {
		data.get()
			.nodes
			.into_iter()
			.map(|node| {
				let id = node.id.clone();
				let is_selected = Signal::derive(move || selection.with(|s| s.is_selected(&id)));
				view! { <FlowchartNode node=node is_selected=is_selected on_select=on_select /> }
			})
			.collect_view()
	};

	view! {
		<div class="flowchart-root">
			<DetailPanel selection=selection />

			<div class="flowchart-toolbar">
				<button title="Zoom In" on:click=move |_| viewport.update(|v| v.zoom_by(ZOOM_STEP))>
					"+"
				</button>
				<button title="Zoom Out" on:click=move |_| viewport.update(|v| v.zoom_by(-ZOOM_STEP))>
					"−"
				</button>
				<button title="Reset" on:click=move |_| viewport.update(|v| v.reset_zoom())>
					"⟲"
				</button>
			</div>

			<div class="canvas-scroll">
				<div
					class="canvas-layer"
					style=move || {
						format!(
							"width: {CANVAS_WIDTH}px; height: {CANVAS_HEIGHT}px; transform: {};",
							viewport.get().css_transform(),
						)
					}
				>
					<svg class="edge-layer" width=CANVAS_WIDTH height=CANVAS_HEIGHT>
						<defs>
							<marker
								id="arrowhead"
								markerWidth="8"
								markerHeight="8"
								refX="8"
								refY="4"
								orient="auto"
							>
								<path d="M0,0 L8,4 L0,8 z" fill="black" />
							</marker>
						</defs>
						{edges}
					</svg>
					{nodes}
				</div>
			</div>
		</div>
	}
}
