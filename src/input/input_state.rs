use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Editing state of one bound field
///
/// The textarea is the terminal-side editor; the document keeps the
/// authoritative value and is updated from it after every edit.
pub struct InputState {
    pub textarea: TextArea<'static>,
    title: String,
    placeholder: String,
    focused: bool,
}

impl InputState {
    pub fn new(title: &str, placeholder: &str) -> Self {
        let mut state = Self {
            textarea: TextArea::default(),
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            focused: false,
        };
        state.style_textarea();
        state
    }

    fn style_textarea(&mut self) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.title))
                .border_style(Style::default().fg(border_color)),
        );
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(self.placeholder.clone());

        // Hide the cursor on unfocused fields
        let cursor_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the text and park the cursor at its end
    pub fn set_text(&mut self, text: &str) {
        self.textarea = TextArea::new(vec![text.to_string()]);
        self.style_textarea();
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.style_textarea();
        }
    }

    /// Feed a key to the editor. Returns true if the text changed.
    ///
    /// Keys that would open a second line are swallowed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let newline = key.code == KeyCode::Enter
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
        if newline {
            return false;
        }
        self.textarea.input(key)
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
