//! Color theme constants for the PetPal UI
//!
//! The single place styling decisions live. Render functions import colors
//! from here rather than spelling them inline.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::Rgb(255, 170, 60);

/// Highlights and key hints
pub const COLOR_ACCENT: Color = Color::White;

/// Titles and the app name
pub const COLOR_HEADER: Color = Color::Rgb(255, 170, 60);

/// Selected chips, confidence, connected status
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Less important text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for text fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for the notification dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Errors and failed connection
pub const COLOR_ERROR: Color = Color::Red;

/// Degraded connection and pending work
pub const COLOR_WARNING: Color = Color::Yellow;

// ============================================================================
// Content Colors
// ============================================================================

/// Recipe tags
pub const COLOR_TAG: Color = Color::Cyan;

/// Nutrition figure labels
pub const COLOR_NUTRIENT: Color = Color::Rgb(4, 181, 117);

/// Chat: user messages
pub const COLOR_USER_MESSAGE: Color = Color::LightBlue;

/// Chat: assistant messages
pub const COLOR_ASSISTANT_MESSAGE: Color = Color::Gray;
