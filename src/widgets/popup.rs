use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Popup directly under `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let room = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(room),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Below the anchor when the popup fits there or there is more room below
/// than above, otherwise above
pub fn popup_near_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(bounds.y);
    if below >= height || below >= above {
        popup_below_anchor(anchor, bounds, width, height, x_offset)
    } else {
        popup_above_anchor(anchor, width, height, x_offset)
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
