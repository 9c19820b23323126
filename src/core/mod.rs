//! Core business logic for the dashboard.
//!
//! This module provides:
//! - [`error::FetchError`] for transport failures
//! - [`fetch_segments`], [`fetch_stores`] sales data access

pub mod error;
mod sales;

pub use sales::{fetch_segments, fetch_stores};
