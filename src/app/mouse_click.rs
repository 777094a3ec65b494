//! Mouse click handling
//!
//! Resolves a click to the document node drawn under it, then behaves like a
//! browser click on that node: focus the field or pick the row, and finally
//! let the shared document click listener dismiss unrelated panels.

use super::state::App;
use crate::layout::region_at;

/// Handle a left click at (`column`, `row`)
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let target = region_at(&app.layout, column, row).unwrap_or(app.document.body());

    if let Some(field) = app.binder.field_for_input(target)
        && app.focus != Some(field)
    {
        // Focusing already dispatches the document click
        app.focus_field(field);
        return;
    }

    if let Some((field, index)) = app.binder.row_for_node(&app.document, target) {
        app.select_row(field, index);
    }

    app.binder.on_document_click(&mut app.document, target);
    if app.visible_row_count() == 0 {
        app.highlighted = None;
    }
}
