use leptos::prelude::*;
use leptos::task::spawn_local;

use super::selection::Selection;
use crate::services::explain::explain_step;

/// Slide-in panel showing the selected step's documentation, with an
/// on-demand remote explanation.
///
/// The explanation request is fire-and-forget: the panel stays closable and
/// re-selectable while it is outstanding. Each request captures the selection
/// generation at dispatch and only applies its response if that generation is
/// still current, so a late response for a deselected node is dropped.
#[component]
pub fn DetailPanel(selection: RwSignal<Selection>) -> impl IntoView {
	let explanation = RwSignal::new(Option::<String>::None);
	let explaining = RwSignal::new(false);

	// Any selection transition invalidates whatever was showing.
	Effect::new(move |_| {
		selection.track();
		explanation.set(None);
		explaining.set(false);
	});

	let explain = move |_| {
		let Some(node) = selection.with_untracked(|s| s.current().cloned()) else {
			return;
		};
		let token = selection.with_untracked(|s| s.generation());
		explaining.set(true);
		spawn_local(async move {
			let text =
				explain_step(&node.label, node.description.as_deref().unwrap_or_default()).await;
			if selection.with_untracked(|s| s.accepts(token)) {
				explanation.set(Some(text));
				explaining.set(false);
			}
		});
	};

	view! {
		<Show when=move || selection.with(|s| s.current().is_some())>
			<aside class="detail-panel">
				{move || {
					selection
						.with(|s| s.current().cloned())
						.map(|node| {
							view! {
								<div class="detail-header">
									<div>
										<h2>{node.label.clone()}</h2>
										<span class="detail-category">{node.category.tag()}</span>
									</div>
									<button
										class="detail-close"
										title="Close"
										on:click=move |_| selection.update(|s| s.dismiss())
									>
										"✕"
									</button>
								</div>
								<h3>"Technical Documentation"</h3>
								<div class="detail-description">
									{node.description.clone().unwrap_or_default()}
								</div>
								<button
									class="detail-explain"
									disabled=move || explaining.get()
									on:click=explain
								>
									{move || {
										if explaining.get() { "Generating…" } else { "Explain this step" }
									}}
								</button>
								{move || {
									explanation
										.get()
										.map(|text| view! { <div class="detail-explanation">{text}</div> })
								}}
							}
						})
				}}
			</aside>
		</Show>
	}
}
