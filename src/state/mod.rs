//! Application state
//!
//! - [`SelectionState`]: input mode, picked image, dietary filters and the
//!   latest breed/recipe results, changed only through transition methods
//! - [`ChatPanel`]: the conversation for the breed currently shown

pub mod chat;
pub mod selection;

pub use chat::{ChatPanel, ChatRequest, CHAT_FALLBACK_MESSAGE, SAMPLE_QUESTIONS};
pub use selection::{
    Applied, InputMode, LoadState, RequestKind, RequestTicket, SelectionState,
};
