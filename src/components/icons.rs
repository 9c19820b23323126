//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuChartBar as Chart, LuChevronRight as ChevronRight,
        LuHouse as Home, LuMaximize as Fullscreen, LuMinimize as ExitFullscreen,
        LuRefreshCw as Retry, LuStore as Store, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Retry, BsArrowUp as Up, BsArrowsFullscreen as Fullscreen,
        BsBarChartFill as Chart, BsChevronRight as ChevronRight,
        BsExclamationTriangle as Warning, BsFullscreenExit as ExitFullscreen,
        BsHouseFill as Home, BsShop as Store,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(UP, Up);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(EXIT_FULLSCREEN, ExitFullscreen);
themed_icon!(RETRY, Retry);
themed_icon!(WARNING, Warning);
themed_icon!(CHART, Chart);
themed_icon!(STORE, Store);
