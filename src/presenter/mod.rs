//! Presentation seam between the plugin and the dialog toolkit

mod terminal;

use crate::state::{DisplayItem, NoticeChoice};
use anyhow::Result;

pub use terminal::TerminalPresenter;

/// Shows dialogs to the user.
///
/// Both calls block until the user dismisses the dialog.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter: Send + Sync {
    /// Show the items in the two-column info dialog
    fn present(&self, title: &str, items: &[DisplayItem]) -> Result<()>;

    /// Show the acknowledge/cancel failure prompt
    fn notify_failure(&self, title: &str, message: &str) -> Result<NoticeChoice>;
}
