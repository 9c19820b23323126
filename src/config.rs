//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Navigation and cache defaults live in [`drillboard_core::config`].

use std::time::Duration;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "drillboard";

/// Title of the sales drill-down panel.
pub const SALES_PANEL_TITLE: &str = "Sales by region";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Base URL for dashboard data (static JSON, relative to the page).
pub const DATA_BASE_URL: &str = "./data";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    use super::Duration;

    /// How long sales payloads stay valid.
    pub const SALES_TTL: Duration = Duration::from_secs(2 * 60);

    /// Prefix for sales cache keys.
    pub const SALES_KEY_PREFIX: &str = "sales";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
