use super::types::Node;

/// Which node the detail panel is showing, if any. Two states: closed (no
/// selection) and open (exactly one node selected).
///
/// The generation counter is bumped on every transition and serves as the
/// token for in-flight explanation requests: a response is applied only if
/// the generation captured at dispatch still matches, so a late response for
/// a node that is no longer selected is discarded instead of landing on
/// whatever is displayed now.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
	current: Option<Node>,
	generation: u64,
}

impl Selection {
	/// Select a node. Replaces any previous selection directly, without an
	/// intermediate closed state. Re-selecting the current node is a no-op
	/// apart from invalidating outstanding requests.
	pub fn select(&mut self, node: Node) {
		self.current = Some(node);
		self.generation += 1;
	}

	/// Explicit dismiss. The only way the panel closes.
	pub fn dismiss(&mut self) {
		self.current = None;
		self.generation += 1;
	}

	pub fn current(&self) -> Option<&Node> {
		self.current.as_ref()
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.current.as_ref().is_some_and(|n| n.id == id)
	}

	/// Token to capture when dispatching an async request tied to the
	/// current selection.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether a response dispatched under `token` may still be applied.
	pub fn accepts(&self, token: u64) -> bool {
		self.generation == token
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flowchart::types::NodeCategory;

	fn node(id: &str) -> Node {
		Node {
			id: id.into(),
			category: NodeCategory::Process,
			label: id.to_uppercase(),
			description: Some(format!("doc for {id}")),
			x: 0.0,
			y: 0.0,
		}
	}

	#[test]
	fn selecting_another_node_replaces_directly() {
		let mut sel = Selection::default();
		sel.select(node("a"));
		assert!(sel.is_selected("a"));

		// Open -> open: never passes through the closed state.
		sel.select(node("b"));
		assert!(sel.current().is_some());
		assert!(sel.is_selected("b"));
		assert!(!sel.is_selected("a"));
	}

	#[test]
	fn dismiss_clears_the_selection() {
		let mut sel = Selection::default();
		sel.select(node("a"));
		sel.dismiss();
		assert!(sel.current().is_none());
		assert!(!sel.is_selected("a"));
	}

	#[test]
	fn reselecting_the_same_node_is_harmless() {
		let mut sel = Selection::default();
		sel.select(node("a"));
		sel.select(node("a"));
		assert!(sel.is_selected("a"));
	}

	#[test]
	fn stale_tokens_are_rejected_after_any_transition() {
		let mut sel = Selection::default();
		sel.select(node("a"));
		let token = sel.generation();
		assert!(sel.accepts(token));

		sel.select(node("b"));
		assert!(!sel.accepts(token));

		let token = sel.generation();
		sel.dismiss();
		assert!(!sel.accepts(token));

		// A dismissed panel followed by a fresh selection still rejects
		// everything dispatched earlier.
		sel.select(node("c"));
		assert!(!sel.accepts(token));
	}
}
