//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the search bar in lines (border + input row).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the results pane; the detail pane takes the rest.
pub const RESULTS_WIDTH_PERCENT: u16 = 40;

/// Rows occupied by one result card (title + thumbnail line).
pub const CARD_HEIGHT: u16 = 2;
