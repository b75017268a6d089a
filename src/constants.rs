//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Preference storage constants
pub mod storage {
    /// Directory under the platform config dir holding the preference file
    pub const APP_DIR: &str = "folio-view";

    /// Preference file name (JSON object of string keys/values)
    pub const FILENAME: &str = "preferences.json";

    /// Storage key for the language preference
    pub const LANG_KEY: &str = "lang";

    /// Storage key for the palette preference
    pub const PALETTE_KEY: &str = "palette";
}

/// Root attribute names reflected for styling/locale consumers
pub mod attrs {
    /// Root language attribute
    pub const LANG: &str = "lang";

    /// Root palette attribute
    pub const PALETTE: &str = "data-palette";
}

/// Redraw scheduling delays
pub mod timing {
    /// Deferred initial connector draw, letting layout settle after mount
    pub const INITIAL_DRAW_DELAY_MS: u64 = 100;

    /// Debounce window for resize-triggered redraws
    pub const RESIZE_DEBOUNCE_MS: u64 = 250;

    /// Redraw delay after the window regains visibility
    pub const VISIBILITY_REDRAW_DELAY_MS: u64 = 100;
}

/// Connector stroke styling
pub mod stroke {
    /// Stroke width of a connector at rest
    pub const BASE_WIDTH: f32 = 3.0;

    /// Stroke width of a connector touching the active node
    pub const EMPHASIS_WIDTH: f32 = 4.0;

    /// Opacity of a connector at rest
    pub const BASE_OPACITY: f32 = 0.8;

    /// Opacity of a connector touching the active node
    pub const EMPHASIS_OPACITY: f32 = 1.0;

    /// Opacity of connectors away from the active node
    pub const DIM_OPACITY: f32 = 0.6;

    /// Dash segment length of a connector at rest
    pub const DASH_LENGTH: f32 = 5.0;

    /// Gap length between dash segments
    pub const DASH_GAP: f32 = 5.0;

    /// Number of straight segments a connector curve is flattened into
    pub const FLATTEN_STEPS: usize = 24;
}

/// Fallback colors when a palette definition is unreadable
pub mod fallback {
    /// Primary connector color, rgb(59, 130, 246)
    pub const PRIMARY: (u8, u8, u8) = (59, 130, 246);

    /// Accent color for emphasized connectors, rgb(16, 185, 129)
    pub const ACCENT: (u8, u8, u8) = (16, 185, 129);
}

/// Timeline reveal and parallax tuning
pub mod motion {
    /// Fraction of an item that must intersect the viewport to reveal it
    pub const REVEAL_THRESHOLD: f32 = 0.5;

    /// Viewport width at or below which parallax is disabled
    pub const PARALLAX_BREAKPOINT: f32 = 960.0;

    /// Maximum vertical parallax shift in either direction
    pub const PARALLAX_MAX_SHIFT: f32 = 14.0;

    /// Maximum deviation of the parallax scale factor from 1.0
    pub const PARALLAX_MAX_SCALE_DELTA: f32 = 0.02;
}

/// Navigation bar scroll states
pub mod nav {
    /// Scroll offset from which the header counts as pinned
    pub const PIN_SCROLL_Y: f32 = 48.0;
}
