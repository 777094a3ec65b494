use super::row::build_row;
use crate::dom::{Document, NodeId};
use crate::search::SuggestionItem;

/// A row element and the item it was rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub node: NodeId,
    pub item: SuggestionItem,
}

/// An input wired to its suggestion panel
#[derive(Debug, Clone)]
pub struct BoundField {
    pub input: NodeId,
    pub panel: NodeId,
    pub form: Option<NodeId>,
    pub mode: String,
    pub(super) latest_request_id: Option<u64>,
    pub(super) rows: Vec<RenderedRow>,
}

impl BoundField {
    pub fn new(input: NodeId, panel: NodeId, form: Option<NodeId>, mode: String) -> Self {
        Self {
            input,
            panel,
            form,
            mode,
            latest_request_id: None,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn latest_request_id(&self) -> Option<u64> {
        self.latest_request_id
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.is_displayed(self.panel)
    }

    pub(super) fn hide(&self, doc: &mut Document) {
        doc.set_display(self.panel, false);
    }

    pub(super) fn clear_rows(&mut self, doc: &mut Document) {
        doc.clear_children(self.panel);
        self.rows.clear();
    }

    /// Replace the panel's rows with `items` and show it
    pub(super) fn render_rows(&mut self, doc: &mut Document, items: Vec<SuggestionItem>) {
        self.clear_rows(doc);
        for item in items {
            let node = build_row(doc, &item);
            doc.append_child(self.panel, node);
            self.rows.push(RenderedRow { node, item });
        }
        doc.set_display(self.panel, true);
    }
}
