use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_NOTIFICATION_WIDTH: u16 = 60;
const NOTIFICATION_MARGIN: u16 = 1;

/// Draw the active notification in the bottom-right corner of `area`
pub fn render_notification(frame: &mut Frame, area: Rect, state: &mut NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let width = (notification.message.width() as u16 + 4)
        .min(MAX_NOTIFICATION_WIDTH)
        .min(area.width);
    let height = 3.min(area.height);
    let notification_area = Rect {
        x: area.x + area.width.saturating_sub(width + NOTIFICATION_MARGIN),
        y: area.y + area.height.saturating_sub(height + NOTIFICATION_MARGIN),
        width,
        height,
    };

    popup::clear_area(frame, notification_area);
    let paragraph = Paragraph::new(Line::from(notification.message.clone()))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, notification_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
