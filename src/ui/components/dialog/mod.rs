//! Dialog components

mod base;
mod info_dialog;
mod notice_dialog;

pub use info_dialog::{render_info_dialog, InfoDialog};
pub use notice_dialog::render_notice_dialog;
