use leptos::prelude::*;

use crate::components::flowchart::{FlowchartCanvas, customer_sync_workflow};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Parsed once; the dataset is read-only after construction.
	let graph_data = RwSignal::new(customer_sync_workflow());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-flowchart">
				<FlowchartCanvas data=graph_data />
				<div class="title-card">
					<h1>"Workflow " <span class="title-divider">"/"</span> " Customer Sync"</h1>
					<p class="subtitle">
						"BigCommerce → Shopify. Click a step for documentation, use the toolbar to zoom."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
