//! Reusable UI components.

pub mod flowchart;
