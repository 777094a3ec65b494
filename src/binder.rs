//! Autocomplete binder
//!
//! Wires every input matching the field selector to its suggestion panel.
//! Focus and input events produce search requests; responses are applied back
//! to the panel as a freshly rendered list of rows. A row click fills the field
//! and submits its form, and a click anywhere outside a field and its panel
//! hides that panel.
//!
//! Responses are applied only if they answer the latest request issued for
//! their field, so a slow response can never overwrite a newer one.

mod bound_field;
mod row;

pub use bound_field::{BoundField, RenderedRow};
pub use row::build_row;

use crate::config::BinderConfig;
use crate::dom::{Document, FormSubmission, NodeId, Selector};
use crate::error::CharsearchError;
use crate::search::{SearchError, SuggestionItem};

/// Index of a bound field, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

/// Request messages sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: FieldId,
    /// Unique, increasing ID used to filter stale responses
    pub request_id: u64,
    /// Trimmed field value, possibly empty
    pub query: String,
    pub mode: String,
}

/// Response messages received from the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub field: FieldId,
    pub request_id: u64,
    pub result: Result<Vec<SuggestionItem>, SearchError>,
}

/// What applying a response did to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Panel shows this many rows
    Rendered { count: usize },
    /// Zero matches; panel hidden
    Hidden,
    /// A newer request exists for the field; response dropped
    Stale,
    /// The search failed; panel hidden
    Failed(SearchError),
    /// The response names a field that was never bound
    UnknownField,
}

/// Result of choosing a suggestion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelection {
    pub field: FieldId,
    pub name: String,
    /// `None` when the field has no enclosing form
    pub submission: Option<FormSubmission>,
}

/// All bound fields of a document and the request counter they share
#[derive(Debug, Clone)]
pub struct Binder {
    fields: Vec<BoundField>,
    last_request_id: u64,
}

impl Binder {
    /// Discover and bind every field in `doc`
    ///
    /// Each field's panel is the first panel-selector match under the field's
    /// parent. Fields without one, or whose panel is already taken by an
    /// earlier field, are skipped. Every panel starts hidden.
    pub fn bind(doc: &mut Document, config: &BinderConfig) -> Result<Self, CharsearchError> {
        let field_selector: Selector = config.field_selector.parse()?;
        let panel_selector: Selector = config.panel_selector.parse()?;
        let form_selector: Selector = "form".parse()?;

        let mut fields: Vec<BoundField> = Vec::new();
        for input in doc.query_selector_all(doc.body(), &field_selector) {
            let panel = doc
                .parent(input)
                .and_then(|parent| doc.query_selector(parent, &panel_selector))
                .filter(|panel| *panel != input);
            let Some(panel) = panel else {
                log::warn!(
                    "Field {:?} has no '{}' next to it, not binding",
                    input,
                    config.panel_selector
                );
                continue;
            };
            if fields.iter().any(|f| f.panel == panel) {
                log::warn!(
                    "Field {:?} shares its panel with an earlier field, not binding",
                    input
                );
                continue;
            }

            // An empty mode attribute counts as absent
            let mode = doc
                .attr(input, &config.mode_attribute)
                .filter(|mode| !mode.is_empty())
                .unwrap_or(config.default_mode.as_str())
                .to_string();
            let form = doc.closest(input, &form_selector);

            doc.set_display(panel, false);
            fields.push(BoundField::new(input, panel, form, mode));
        }

        log::debug!("Bound {} field(s)", fields.len());
        Ok(Self {
            fields,
            last_request_id: 0,
        })
    }

    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&BoundField> {
        self.fields.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The bound field whose input element is `node`
    pub fn field_for_input(&self, node: NodeId) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.input == node)
            .map(FieldId)
    }

    /// Focus listener
    pub fn on_focus(&mut self, doc: &Document, field: FieldId) -> Option<SearchRequest> {
        let query = doc.value(self.field(field)?.input).trim().to_string();
        self.load_suggestions(field, &query)
    }

    /// Input listener
    pub fn on_input(&mut self, doc: &Document, field: FieldId) -> Option<SearchRequest> {
        let query = doc.value(self.field(field)?.input).trim().to_string();
        self.load_suggestions(field, &query)
    }

    /// Issue a request for `query`; it becomes the field's latest request
    pub fn load_suggestions(&mut self, field: FieldId, query: &str) -> Option<SearchRequest> {
        let bound = self.fields.get_mut(field.0)?;
        self.last_request_id = self.last_request_id.wrapping_add(1);
        bound.latest_request_id = Some(self.last_request_id);

        Some(SearchRequest {
            field,
            request_id: self.last_request_id,
            query: query.to_string(),
            mode: bound.mode.clone(),
        })
    }

    /// Apply a worker response to its field's panel
    pub fn apply_response(&mut self, doc: &mut Document, response: SearchResponse) -> ResponseOutcome {
        let Some(bound) = self.fields.get_mut(response.field.0) else {
            return ResponseOutcome::UnknownField;
        };

        if bound.latest_request_id != Some(response.request_id) {
            log::debug!(
                "Dropping stale response {} for field {} (latest {:?})",
                response.request_id,
                response.field.0,
                bound.latest_request_id
            );
            return ResponseOutcome::Stale;
        }

        match response.result {
            Ok(items) if items.is_empty() => {
                bound.clear_rows(doc);
                bound.hide(doc);
                ResponseOutcome::Hidden
            }
            Ok(items) => {
                let count = items.len();
                bound.render_rows(doc, items);
                ResponseOutcome::Rendered { count }
            }
            Err(e) => {
                log::warn!("Search for field {} failed: {}", response.field.0, e);
                bound.clear_rows(doc);
                bound.hide(doc);
                ResponseOutcome::Failed(e)
            }
        }
    }

    /// The rendered row containing `node`, as (field, row index)
    pub fn row_for_node(&self, doc: &Document, node: NodeId) -> Option<(FieldId, usize)> {
        self.fields.iter().enumerate().find_map(|(i, field)| {
            if !doc.contains(field.panel, node) {
                return None;
            }
            field
                .rows
                .iter()
                .position(|row| doc.contains(row.node, node))
                .map(|index| (FieldId(i), index))
        })
    }

    /// Row click handler: fill the field with the row's name and submit its form
    pub fn select_row(
        &self,
        doc: &mut Document,
        field: FieldId,
        index: usize,
    ) -> Option<RowSelection> {
        let bound = self.fields.get(field.0)?;
        let name = bound.rows.get(index)?.item.name.clone();

        doc.set_value(bound.input, &name);
        bound.hide(doc);

        let submission = match bound.form {
            Some(form) => doc.submit(form),
            None => {
                log::warn!("Field {} is not inside a form, nothing submitted", field.0);
                None
            }
        };

        Some(RowSelection {
            field,
            name,
            submission,
        })
    }

    /// Resolve a click target to a row and select it
    pub fn click_row(&self, doc: &mut Document, target: NodeId) -> Option<RowSelection> {
        let (field, index) = self.row_for_node(doc, target)?;
        self.select_row(doc, field, index)
    }

    /// Shared document click listener
    ///
    /// Hides every panel for which `target` is neither inside the panel nor
    /// the field itself. Returns how many panels were hidden.
    pub fn on_document_click(&self, doc: &mut Document, target: NodeId) -> usize {
        let mut hidden = 0;
        for field in &self.fields {
            if doc.contains(field.panel, target) || field.input == target {
                continue;
            }
            if doc.is_displayed(field.panel) {
                hidden += 1;
            }
            field.hide(doc);
        }
        hidden
    }

    pub fn hide_panel(&self, doc: &mut Document, field: FieldId) {
        if let Some(bound) = self.field(field) {
            bound.hide(doc);
        }
    }

    pub fn is_panel_visible(&self, doc: &Document, field: FieldId) -> bool {
        self.field(field).is_some_and(|f| f.is_visible(doc))
    }
}
