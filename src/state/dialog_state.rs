//! Interaction state of the info dialog and the failure prompt

use crate::platform::COPY_MODIFIER;
use crossterm::event::{KeyCode, KeyEvent};

/// Lines scrolled by PgUp/PgDn
const PAGE_SCROLL: u16 = 10;

/// What the dialog loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Copy,
    Close,
}

/// State of the read-only info dialog
#[derive(Debug, Clone, Default)]
pub struct InfoDialogState {
    /// First visible content line
    pub scroll: u16,
    /// Largest useful scroll offset, updated on every render
    pub max_scroll: u16,
    /// Feedback shown in place of the key hints (e.g. after copying)
    pub status: Option<String>,
}

impl InfoDialogState {
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(COPY_MODIFIER) {
            return DialogAction::Copy;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return DialogAction::Close,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_to(self.scroll.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_to(self.scroll.saturating_add(1)),
            KeyCode::PageUp => self.scroll_to(self.scroll.saturating_sub(PAGE_SCROLL)),
            KeyCode::PageDown => self.scroll_to(self.scroll.saturating_add(PAGE_SCROLL)),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(self.max_scroll),
            _ => {}
        }
        self.status = None;
        DialogAction::None
    }

    /// Record the content height of the last render and keep the scroll offset in range
    pub fn set_content_height(&mut self, content_lines: usize, visible_lines: u16) {
        let hidden = content_lines.saturating_sub(visible_lines as usize);
        self.max_scroll = u16::try_from(hidden).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.max_scroll);
    }
}

/// Option chosen in the failure prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeChoice {
    #[default]
    Ok,
    Cancel,
}

impl NoticeChoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancel => "Abbrechen",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Ok => Self::Cancel,
            Self::Cancel => Self::Ok,
        }
    }
}

/// State of the acknowledge/cancel prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeState {
    pub selected: NoticeChoice,
}

impl NoticeState {
    /// Returns the final choice once the prompt is answered
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NoticeChoice> {
        match key.code {
            KeyCode::Enter => Some(self.selected),
            KeyCode::Esc => Some(NoticeChoice::Cancel),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = self.selected.toggle();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_info_dialog_close_keys() {
        let mut state = InfoDialogState::default();
        assert_eq!(state.handle_key(key(KeyCode::Esc)), DialogAction::Close);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), DialogAction::Close);
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), DialogAction::Close);
    }

    #[test]
    fn test_info_dialog_copy_shortcut() {
        let mut state = InfoDialogState::default();
        let copy = KeyEvent::new(KeyCode::Char('c'), COPY_MODIFIER);
        assert_eq!(state.handle_key(copy), DialogAction::Copy);
        // plain 'c' does nothing
        assert_eq!(state.handle_key(key(KeyCode::Char('c'))), DialogAction::None);
    }

    #[test]
    fn test_info_dialog_scroll_is_clamped() {
        let mut state = InfoDialogState::default();
        state.set_content_height(30, 10);
        assert_eq!(state.max_scroll, 20);

        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.scroll, 0);

        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.scroll, 1);

        state.handle_key(key(KeyCode::PageDown));
        state.handle_key(key(KeyCode::PageDown));
        state.handle_key(key(KeyCode::PageDown));
        assert_eq!(state.scroll, 20);

        state.handle_key(key(KeyCode::Home));
        assert_eq!(state.scroll, 0);

        state.handle_key(key(KeyCode::End));
        assert_eq!(state.scroll, 20);
    }

    #[test]
    fn test_shrinking_content_pulls_scroll_back() {
        let mut state = InfoDialogState::default();
        state.set_content_height(30, 10);
        state.handle_key(key(KeyCode::End));
        state.set_content_height(12, 10);
        assert_eq!(state.scroll, 2);
        state.set_content_height(5, 10);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.max_scroll, 0);
    }

    #[test]
    fn test_key_press_clears_status() {
        let mut state = InfoDialogState {
            status: Some("Kopiert".to_string()),
            ..Default::default()
        };
        state.handle_key(key(KeyCode::Down));
        assert!(state.status.is_none());
    }

    #[test]
    fn test_notice_defaults_to_ok() {
        let mut state = NoticeState::default();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(NoticeChoice::Ok));
    }

    #[test]
    fn test_notice_toggle_and_confirm() {
        let mut state = NoticeState::default();
        assert_eq!(state.handle_key(key(KeyCode::Right)), None);
        assert_eq!(state.selected, NoticeChoice::Cancel);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), Some(NoticeChoice::Cancel));
        assert_eq!(state.handle_key(key(KeyCode::Tab)), None);
        assert_eq!(state.selected, NoticeChoice::Ok);
    }

    #[test]
    fn test_notice_escape_cancels() {
        let mut state = NoticeState::default();
        assert_eq!(state.handle_key(key(KeyCode::Esc)), Some(NoticeChoice::Cancel));
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_notice_choice_labels() {
        assert_eq!(NoticeChoice::Ok.label(), "OK");
        assert_eq!(NoticeChoice::Cancel.label(), "Abbrechen");
    }
}
