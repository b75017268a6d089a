//! GUI-specific constants for layout and intervals

/// Viewer window dimensions
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 780.0;
pub const WINDOW_MIN_WIDTH: f32 = 800.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Window and application title
pub const APP_TITLE: &str = "Folio View";

/// Layout spacing
pub const SECTION_SPACING: f32 = 24.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Diagram canvas height and node card size
pub const DIAGRAM_HEIGHT: f32 = 420.0;
pub const NODE_WIDTH: f32 = 160.0;
pub const NODE_HEIGHT: f32 = 96.0;

/// Idle repaint interval when no redraw deadline is armed
pub const IDLE_REPAINT_MS: u64 = 500;
