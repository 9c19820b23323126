//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Segment`], [`StoreRow`] - Sales payloads
//! - [`SalesScope`] - Which slice of the hierarchy a level fetches
//! - [`trail_hash`] - URL hash mirroring of the drill trail

mod route;
mod sales;

pub use route::{replace_hash, trail_hash};
pub use sales::{SalesScope, Segment, StoreRow};
