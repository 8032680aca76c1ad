use serde::Deserialize;

/// Category of a workflow step. Determines the rendered shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeCategory {
	Start,
	Process,
	Decision,
	End,
}

impl NodeCategory {
	/// Display tag shown in the detail panel.
	pub fn tag(self) -> &'static str {
		match self {
			NodeCategory::Start => "START",
			NodeCategory::Process => "PROCESS",
			NodeCategory::Decision => "DECISION",
			NodeCategory::End => "END",
		}
	}
}

/// A workflow step. `x`/`y` is the node center in logical (untransformed)
/// coordinates. Immutable once the dataset is constructed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Node {
	pub id: String,
	pub category: NodeCategory,
	pub label: String,
	#[serde(default)]
	pub description: Option<String>,
	pub x: f64,
	pub y: f64,
}

/// A directed connection between two steps, optionally labeled
/// (decision branches like "Yes"/"No").
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge {
	pub id: String,
	#[serde(rename = "sourceId")]
	pub source: String,
	#[serde(rename = "targetId")]
	pub target: String,
	#[serde(default)]
	pub label: Option<String>,
}

/// The complete diagram: node and edge lists.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FlowchartData {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl FlowchartData {
	/// Parse a diagram from its JSON configuration form
	/// (`{"nodes": [...], "edges": [...]}`).
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Join each edge with its endpoint nodes. Edges referencing a missing
	/// node are skipped, not an error.
	pub fn resolved_edges(&self) -> Vec<(&Edge, &Node, &Node)> {
		self.edges
			.iter()
			.filter_map(|edge| {
				if let (Some(src), Some(tgt)) = (self.node(&edge.source), self.node(&edge.target)) {
					Some((edge, src, tgt))
				} else {
					None
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, x: f64, y: f64) -> Node {
		Node {
			id: id.into(),
			category: NodeCategory::Process,
			label: id.to_uppercase(),
			description: None,
			x,
			y,
		}
	}

	fn edge(id: &str, source: &str, target: &str) -> Edge {
		Edge {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			label: None,
		}
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let data = FlowchartData {
			nodes: vec![node("a", 0.0, 0.0), node("b", 0.0, 100.0)],
			edges: vec![
				edge("ok", "a", "b"),
				edge("no_target", "a", "ghost"),
				edge("no_source", "ghost", "b"),
			],
		};
		let resolved = data.resolved_edges();
		assert_eq!(resolved.len(), 1);
		assert_eq!(resolved[0].0.id, "ok");
	}

	#[test]
	fn parses_configuration_json() {
		let json = r#"{
			"nodes": [
				{ "id": "start", "category": "START", "label": "Start", "x": 10, "y": 20 },
				{
					"id": "check",
					"category": "DECISION",
					"label": "Valid?",
					"description": "Checks the response.",
					"x": 10,
					"y": 120
				}
			],
			"edges": [
				{ "id": "e1", "sourceId": "start", "targetId": "check", "label": "go" }
			]
		}"#;
		let data = FlowchartData::from_json(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].category, NodeCategory::Start);
		assert_eq!(
			data.nodes[1].description.as_deref(),
			Some("Checks the response.")
		);
		assert_eq!(data.edges[0].label.as_deref(), Some("go"));
		assert_eq!(data.resolved_edges().len(), 1);
	}

	#[test]
	fn rejects_unknown_category() {
		let json = r#"{
			"nodes": [{ "id": "x", "category": "LOOP", "label": "x", "x": 0, "y": 0 }],
			"edges": []
		}"#;
		assert!(FlowchartData::from_json(json).is_err());
	}
}
