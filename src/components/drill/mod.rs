//! Drill-down UI.
//!
//! - [`use_drill`] - Navigation state as signals
//! - [`DrillDown`] - Panel with breadcrumbs and per-level content
//! - `Breadcrumbs` - Clickable trail with up/fullscreen controls

mod breadcrumbs;
mod container;
mod hooks;

pub use container::DrillDown;
pub use hooks::{DrillHandle, use_drill};
