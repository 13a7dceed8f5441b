//! Application-wide constants.
//!
//! Centralizes the paper, zoom and geometry limits so the interaction code
//! and the settings defaults agree on the same numbers.

// ============================================================================
// Paper Formats
// ============================================================================

/// A4 width in typographic points (210mm, 1pt = 1/72 inch)
pub const A4_WIDTH_PT: f64 = 595.275590551;

/// A4 height in typographic points (297mm)
pub const A4_HEIGHT_PT: f64 = 841.889763780;

/// US Letter width in points (8.5in)
pub const LETTER_WIDTH_PT: f64 = 612.0;

/// US Letter height in points (11in)
pub const LETTER_HEIGHT_PT: f64 = 792.0;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

// ============================================================================
// Zoom
// ============================================================================

/// Default zoom level (device pixels per page point)
pub const DEFAULT_ZOOM: f64 = 1.25;

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.2;

/// Multiplicative zoom step per zoom action
pub const ZOOM_STEP: f64 = 1.1;

// ============================================================================
// Item Geometry
// ============================================================================

/// Default item width as a fraction of the page width
pub const DEFAULT_ITEM_WIDTH_FRACTION: f64 = 0.5;

/// Minimum item width/height in page points
pub const MIN_ITEM_SIZE: f64 = 10.0;

/// Minimum crop width/height in source pixels
pub const MIN_CROP_SIZE: i32 = 5;

// ============================================================================
// Input Handling
// ============================================================================

/// Handle hit tolerance in page points (zoom-independent)
pub const HANDLE_TOLERANCE: f64 = 10.0;

/// Half-size of a drawn handle square in page points
pub const HANDLE_DRAW_HALF_SIZE: f64 = 8.0;

/// Drawing surface size assumed until the display reports one
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1000.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// ============================================================================
// Export
// ============================================================================

/// Default raster export resolution
pub const DEFAULT_EXPORT_DPI: u32 = 300;

/// Directory name used under the user config dir
pub const APP_DIR_NAME: &str = "cheatsheet-maker";
