//! Terminal presenter drawing the dialogs with ratatui

use super::Presenter;
use crate::state::{items_to_text, DialogAction, DisplayItem, InfoDialogState, NoticeChoice, NoticeState};
use crate::ui::{render_info_dialog, render_notice_dialog, InfoDialog};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Presents dialogs full screen on the controlling terminal
#[derive(Debug, Clone, Copy)]
pub struct TerminalPresenter {
    /// Info dialog width in cells
    dialog_width: u16,
    /// Info dialog height in cells
    dialog_height: u16,
}

impl TerminalPresenter {
    pub fn new(dialog_width: u16, dialog_height: u16) -> Self {
        Self {
            dialog_width,
            dialog_height,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&self, title: &str, items: &[DisplayItem]) -> Result<()> {
        let dialog = InfoDialog {
            title,
            items,
            width: self.dialog_width,
            height: self.dialog_height,
        };
        with_terminal(|terminal| run_info_dialog(terminal, &dialog))
    }

    fn notify_failure(&self, title: &str, message: &str) -> Result<NoticeChoice> {
        with_terminal(|terminal| run_notice_dialog(terminal, title, message))
    }
}

/// Run `f` on the alternate screen, restoring the terminal afterwards even if `f` fails
fn with_terminal<T>(
    f: impl FnOnce(&mut Terminal<CrosstermBackend<Stdout>>) -> Result<T>,
) -> Result<T> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = f(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_info_dialog(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    dialog: &InfoDialog,
) -> Result<()> {
    let mut state = InfoDialogState::default();
    loop {
        terminal.draw(|frame| render_info_dialog(frame, dialog, &mut state))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key) {
            DialogAction::Close => return Ok(()),
            DialogAction::Copy => {
                let text = items_to_text(dialog.items);
                state.status = Some(match copy_to_clipboard(&text) {
                    Ok(()) => format!("{} Zeichen kopiert", text.chars().count()),
                    Err(e) => {
                        tracing::warn!("Copy to clipboard failed: {e}");
                        format!("Kopieren fehlgeschlagen: {e}")
                    }
                });
            }
            DialogAction::None => {}
        }
    }
}

fn run_notice_dialog(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    title: &str,
    message: &str,
) -> Result<NoticeChoice> {
    let mut state = NoticeState::default();
    loop {
        terminal.draw(|frame| render_notice_dialog(frame, title, message, &state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(choice) = state.handle_key(key) {
                return Ok(choice);
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
