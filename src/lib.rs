//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;
mod services;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the flowchart homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Workflow Visualizer — Customer Sync" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Style>{STYLESHEET}</Style>

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

// Presentation only; geometry and state live in components/flowchart.
const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: black; background: white; }

.fullscreen-flowchart { width: 100vw; height: 100vh; position: relative; overflow: hidden; }
.flowchart-root { width: 100%; height: 100%; display: flex; }

.canvas-scroll {
	flex: 1;
	position: relative;
	overflow: auto;
	cursor: grab;
	background-image:
		linear-gradient(rgba(0, 0, 0, 0.08) 1px, transparent 1px),
		linear-gradient(90deg, rgba(0, 0, 0, 0.08) 1px, transparent 1px);
	background-size: 40px 40px;
}
.canvas-scroll:active { cursor: grabbing; }
.canvas-layer {
	position: relative;
	transform-origin: top left;
	transition: transform 0.1s ease-out;
}
.edge-layer { position: absolute; inset: 0; pointer-events: none; z-index: 0; }
.edge-label {
	font-size: 10px;
	font-weight: 700;
	text-transform: uppercase;
	letter-spacing: 0.05em;
	fill: black;
}

.flowchart-node { position: absolute; z-index: 10; animation: node-enter 0.3s ease-out both; }
@keyframes node-enter {
	from { opacity: 0; transform: scale(0.8); }
	to { opacity: 1; transform: scale(1); }
}
.node-shape {
	position: absolute;
	inset: 0;
	display: flex;
	align-items: center;
	justify-content: center;
	text-align: center;
	border: 2px solid black;
	background: white;
	cursor: pointer;
	transition: transform 0.3s, background 0.3s, color 0.3s;
}
.node-shape:hover { background: #f5f5f5; }
.node-shape.capsule { border-radius: 9999px; }
.node-shape.rounded { border-radius: 12px; }
.node-shape.diamond { transform: rotate(45deg); border-radius: 12px; }
.node-shape.diamond .node-label { transform: rotate(-45deg); }
.node-shape.selected { background: black; color: white; transform: scale(1.05); }
.node-shape.diamond.selected { transform: rotate(45deg) scale(1.05); }
.node-label { font-size: 13px; font-weight: 600; line-height: 1.2; padding: 0 12px; }

.flowchart-toolbar {
	position: fixed;
	top: 24px;
	left: 24px;
	z-index: 40;
	display: flex;
	flex-direction: column;
	gap: 8px;
	background: white;
	border: 2px solid black;
	border-radius: 8px;
	padding: 8px;
	box-shadow: 4px 4px 0 0 black;
}
.flowchart-toolbar button {
	width: 36px;
	height: 36px;
	font-size: 18px;
	background: white;
	border: none;
	border-radius: 4px;
	cursor: pointer;
}
.flowchart-toolbar button:hover { background: black; color: white; }

.title-card {
	position: fixed;
	top: 24px;
	left: 96px;
	z-index: 30;
	background: white;
	border: 2px solid black;
	border-radius: 8px;
	padding: 12px 24px;
	box-shadow: 4px 4px 0 0 black;
	pointer-events: none;
}
.title-card h1 { margin: 0; font-size: 20px; text-transform: uppercase; letter-spacing: -0.02em; }
.title-divider { color: #9ca3af; font-weight: 300; }
.title-card .subtitle { margin: 4px 0 0; font-size: 11px; font-family: monospace; color: #6b7280; }

.detail-panel {
	position: fixed;
	top: 0;
	right: 0;
	height: 100%;
	width: 384px;
	max-width: 100%;
	z-index: 50;
	background: white;
	border-left: 4px solid black;
	box-shadow: -8px 0 24px rgba(0, 0, 0, 0.15);
	overflow-y: auto;
	padding: 32px;
	animation: panel-in 0.25s ease-out;
}
@keyframes panel-in {
	from { transform: translateX(100%); }
	to { transform: translateX(0); }
}
.detail-header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 24px; }
.detail-header h2 { margin: 0 0 4px; font-size: 24px; letter-spacing: -0.02em; }
.detail-category {
	font-size: 11px;
	font-family: monospace;
	text-transform: uppercase;
	letter-spacing: 0.1em;
	color: #6b7280;
	background: #f3f4f6;
	padding: 2px 8px;
	border-radius: 4px;
}
.detail-close {
	background: none;
	border: 2px solid transparent;
	border-radius: 9999px;
	padding: 8px;
	font-size: 16px;
	cursor: pointer;
}
.detail-close:hover { background: black; color: white; border-color: black; }
.detail-panel h3 { font-size: 13px; text-transform: uppercase; letter-spacing: 0.05em; margin: 0 0 8px; }
.detail-description {
	font-family: monospace;
	font-size: 13px;
	line-height: 1.6;
	white-space: pre-wrap;
	border-left: 4px solid black;
	background: #f9fafb;
	padding: 16px;
	border-radius: 0 8px 8px 0;
	margin-bottom: 24px;
}
.detail-explain {
	width: 100%;
	padding: 12px;
	font-size: 14px;
	font-weight: 600;
	background: black;
	color: white;
	border: 2px solid black;
	border-radius: 8px;
	cursor: pointer;
}
.detail-explain:hover { background: white; color: black; }
.detail-explain:disabled { opacity: 0.5; cursor: wait; }
.detail-explanation {
	margin-top: 16px;
	font-size: 13px;
	line-height: 1.6;
	white-space: pre-wrap;
	background: #f3f4f6;
	padding: 16px;
	border-radius: 8px;
}
"#;
