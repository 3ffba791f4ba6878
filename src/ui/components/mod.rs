//! Reusable UI components

mod dialog;

pub use dialog::{render_info_dialog, render_notice_dialog, InfoDialog};
