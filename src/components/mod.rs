//! UI components built with Leptos.
//!
//! - [`Dashboard`] - Sales dashboard page (main entry point)
//! - [`drill`] - Drill-down panel, breadcrumbs, navigation hook
//! - [`data`] - Data loading hook and status line
//! - [`charts`] - Selectable visualizations
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod charts;
mod dashboard;
pub mod data;
pub mod drill;
pub mod icons;

pub use dashboard::Dashboard;
