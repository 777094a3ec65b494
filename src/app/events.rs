use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::mouse_click;
use super::state::App;

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down => self.highlight_next(),
            KeyCode::Up => self.highlight_prev(),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Esc => self.handle_escape(),
            _ => self.handle_edit_key(key),
        }
    }

    fn handle_enter(&mut self) {
        let Some(field) = self.focus else {
            return;
        };
        match self.highlighted {
            Some(index) if self.visible_row_count() > index => self.select_row(field, index),
            _ => self.submit_focused(),
        }
    }

    fn handle_escape(&mut self) {
        match self.focus {
            Some(field) if self.binder.is_panel_visible(&self.document, field) => {
                self.binder.hide_panel(&mut self.document, field);
                self.highlighted = None;
            }
            _ => self.should_quit = true,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(field) = self.focus else {
            return;
        };
        let changed = self
            .inputs
            .get_mut(field.0)
            .is_some_and(|input| input.input(key));
        if changed {
            self.on_text_changed(field);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.highlight_next(),
            MouseEventKind::ScrollUp => self.highlight_prev(),
            _ => {}
        }
    }
}
