//! The interactive editor: sidebar, newspaper page, side panel and modals.

mod component;
mod modal;
mod newspaper;
mod panel;
mod sidebar;
mod state;
mod toast;

pub use component::{Builder, UiState, UI};
pub use state::EditorState;
pub use toast::{show_toast, ToastKind};
