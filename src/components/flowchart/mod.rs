mod component;
mod data;
mod detail_panel;
mod edge;
pub mod geometry;
mod node;
mod selection;
mod types;
mod viewport;

pub use component::FlowchartCanvas;
pub use data::customer_sync_workflow;
pub use types::{Edge, FlowchartData, Node, NodeCategory};
