//! Reusable UI Components
//!
//! - `TabSelector` - Input mode selector with a `▶` marker
//! - `InputField` - Bordered text field with placeholder and cursor
//! - `StatusIndicator` - Spinner and connection indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{dialog_inner_width, render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, spinner_frame, StatusIndicatorType,
};
pub use tab_selector::{render_tab_selector, TabItem};
