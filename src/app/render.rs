use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::binder::FieldId;
use crate::dom::{NodeId, Selector};
use crate::notification::render_notification;
use crate::widgets::popup;

const FIELD_HEIGHT: u16 = 3;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 6;
const POPUP_OFFSET_X: u16 = 2;
const HELP_TEXT: &str = " Tab: next field | ↑↓: highlight | Enter: select/submit | Esc: close | Ctrl+C: quit ";

/// A suggestion row as read back from the document
struct RowView {
    node: NodeId,
    name: String,
    avatar: String,
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout.clear();

        let mut constraints = Vec::new();
        if self.title.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.extend(self.inputs.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(frame.area());

        let mut next = 0;
        if let Some(title) = &self.title {
            let heading = Paragraph::new(Line::from(Span::styled(
                format!(" {} ", title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(heading, areas[next]);
            next += 1;
        }

        let mut field_areas = Vec::with_capacity(self.inputs.len());
        for (i, input) in self.inputs.iter().enumerate() {
            let area = areas[next + i];
            frame.render_widget(&input.textarea, area);
            if let Some(field) = self.binder.field(FieldId(i)) {
                self.layout.push(area, field.input);
            }
            field_areas.push(area);
        }

        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, areas[areas.len() - 1]);

        // Panels last so they overlap the fields below them
        for (i, area) in field_areas.into_iter().enumerate() {
            self.render_panel(frame, FieldId(i), area);
        }

        let screen = frame.area();
        render_notification(frame, screen, &mut self.notification);
    }

    fn panel_rows(&self, field: FieldId) -> Vec<RowView> {
        let Some(bound) = self.binder.field(field) else {
            return Vec::new();
        };
        let (Ok(img), Ok(label)) = ("img".parse::<Selector>(), "span".parse::<Selector>()) else {
            return Vec::new();
        };

        self.document
            .children(bound.panel)
            .iter()
            .map(|&node| RowView {
                node,
                name: self
                    .document
                    .query_selector(node, &label)
                    .map(|span| self.document.text_content(span))
                    .unwrap_or_default(),
                avatar: self
                    .document
                    .query_selector(node, &img)
                    .and_then(|img| self.document.attr(img, "src"))
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }

    /// Render a visible suggestion panel as a popup under its field
    fn render_panel(&mut self, frame: &mut Frame, field: FieldId, anchor: Rect) {
        if !self.binder.is_panel_visible(&self.document, field) {
            return;
        }
        let Some(panel) = self.binder.field(field).map(|f| f.panel) else {
            return;
        };
        let rows = self.panel_rows(field);
        if rows.is_empty() {
            return;
        }

        let visible_count = rows.len().min(self.max_visible_rows);
        let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
        let max_text_width = rows
            .iter()
            .map(|r| r.name.width() + r.avatar.width() + 2)
            .max()
            .unwrap_or(20)
            .min(MAX_POPUP_WIDTH);
        let popup_width = max_text_width as u16 + POPUP_PADDING;

        let popup_area = popup::popup_near_anchor(
            anchor,
            frame.area(),
            popup_width,
            popup_height,
            POPUP_OFFSET_X,
        );
        if popup_area.height <= POPUP_BORDER_HEIGHT {
            return;
        }

        let highlighted = if self.focus == Some(field) {
            self.highlighted
        } else {
            None
        };
        let shown = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
        // Scroll to keep the highlighted row in view
        let offset = match highlighted {
            Some(i) if i >= shown => i + 1 - shown,
            _ => 0,
        };

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(shown)
            .map(|(i, row)| {
                let line = if highlighted == Some(i) {
                    Line::from(vec![
                        Span::styled(
                            format!("► {} ", row.name),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" {}", row.avatar),
                            Style::default().fg(Color::Black).bg(Color::Cyan),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(format!("  {} ", row.name), Style::default().fg(Color::White)),
                        Span::styled(format!(" {}", row.avatar), Style::default().fg(Color::DarkGray)),
                    ])
                };
                ListItem::new(line)
            })
            .collect();

        popup::clear_area(frame, popup_area);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Suggestions ({}) ", rows.len()))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, popup_area);

        self.layout.push(popup_area, panel);
        for (slot, row) in rows.iter().skip(offset).take(shown).enumerate() {
            let row_area = Rect {
                x: popup_area.x + 1,
                y: popup_area.y + 1 + slot as u16,
                width: popup_area.width.saturating_sub(2),
                height: 1,
            };
            self.layout.push(row_area, row.node);
        }
    }
}
