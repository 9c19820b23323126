//! Hierarchical drill-down navigation.
//!
//! - [`DrillNavigator`] - Breadcrumb trail and current level
//! - [`DrillItem`], [`BreadcrumbEntry`] - What a level is made of
//! - [`DrillClickAdapter`] - Visualization clicks to drill-down calls

mod adapter;
mod item;
mod navigator;

pub use adapter::{DrillClickAdapter, SelectionHandler, SupportsSelection};
pub use item::{BreadcrumbEntry, DrillItem};
pub use navigator::{DrillNavigator, LevelView, NavigationState};
