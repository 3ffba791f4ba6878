//! UI module for rendering the dialogs

mod components;

pub use components::{render_info_dialog, render_notice_dialog, InfoDialog};
