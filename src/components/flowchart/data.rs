use super::types::FlowchartData;

/// The shipped diagram: the BigCommerce → Shopify customer-sync workflow,
/// stored in the same JSON shape a host could supply instead.
const CUSTOMER_SYNC_JSON: &str = include_str!("workflow.json");

/// Parse the embedded workflow dataset. Falls back to an empty diagram if
/// the embedded document is malformed, so the app still comes up.
pub fn customer_sync_workflow() -> FlowchartData {
	match FlowchartData::from_json(CUSTOMER_SYNC_JSON) {
		Ok(data) => data,
		Err(err) => {
			log::error!("embedded workflow dataset failed to parse: {err}");
			FlowchartData::default()
		}
	}
}
