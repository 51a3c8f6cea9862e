//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the render functions ask: how wide the input column is, whether
//! the panels stack, how much room the chat gets.

use ratatui::layout::Rect;

/// Terminal breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Height as a percentage of the terminal, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: condense labels and hints.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Input and results columns stack vertically below 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// `(input_width, results_width)` for the side-by-side layout.
    ///
    /// - Medium (< 120): 40/60 split
    /// - Wide (>= 120): 35/65 split with the input column capped at 60
    pub fn two_column_widths(&self) -> (u16, u16) {
        if self.width < breakpoints::MD_WIDTH {
            let left = (self.width * 40) / 100;
            (left, self.width - left)
        } else {
            let left = ((self.width * 35) / 100).min(60);
            (left, self.width - left)
        }
    }

    /// Rows given to the chat panel below the recipes.
    pub fn chat_height(&self, available: u16) -> u16 {
        if self.is_short() {
            (available / 2).max(5)
        } else {
            (available * 2 / 5).clamp(8, 18)
        }
        .min(available)
    }
}
