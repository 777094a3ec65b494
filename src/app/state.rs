use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::binder::{Binder, FieldId, ResponseOutcome, SearchRequest, SearchResponse};
use crate::config::Config;
use crate::dom::{Document, FormSubmission, Page};
use crate::error::CharsearchError;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;

/// Application state
pub struct App {
    pub document: Document,
    pub binder: Binder,
    /// One editor per bound field, indexed by `FieldId`
    pub inputs: Vec<InputState>,
    pub focus: Option<FieldId>,
    /// Keyboard-highlighted row of the focused field's panel
    pub highlighted: Option<usize>,
    pub title: Option<String>,
    pub layout: LayoutRegions,
    pub notification: NotificationState,
    pub max_visible_rows: usize,
    pub submission: Option<FormSubmission>,
    pub should_quit: bool,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl App {
    /// Build the document for `page` and bind its fields
    pub fn new(page: &Page, config: &Config) -> Result<Self, CharsearchError> {
        let mut document = page.build_document();
        let binder = Binder::bind(&mut document, &config.binder)?;

        let inputs = binder
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let title = field
                    .form
                    .and_then(|form| document.attr(form, "data-title"))
                    .or_else(|| document.attr(field.input, "name"))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Field {}", i + 1));
                let placeholder = document.attr(field.input, "placeholder").unwrap_or("");

                let mut input = InputState::new(&title, placeholder);
                let value = document.value(field.input);
                if !value.is_empty() {
                    input.set_text(value);
                }
                input
            })
            .collect();

        Ok(Self {
            document,
            binder,
            inputs,
            focus: None,
            highlighted: None,
            title: page.title.clone(),
            layout: LayoutRegions::new(),
            notification: NotificationState::new(Duration::from_millis(config.ui.notification_ms)),
            max_visible_rows: config.ui.max_visible_rows.max(1),
            submission: None,
            should_quit: false,
            request_tx: None,
            response_rx: None,
        })
    }

    /// Connect the app to a search worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn dispatch(&mut self, request: Option<SearchRequest>) {
        let Some(request) = request else {
            return;
        };
        let Some(tx) = &self.request_tx else {
            log::debug!("No search worker, dropping request {}", request.request_id);
            return;
        };
        if tx.send(request).is_err() {
            self.request_tx = None;
            self.notification.show_error("Search worker stopped");
        }
    }

    /// Apply every response the worker has delivered so far
    pub fn poll_responses(&mut self) {
        loop {
            let Some(rx) = &self.response_rx else {
                return;
            };
            match rx.try_recv() {
                Ok(response) => self.handle_response(response),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    return;
                }
            }
        }
    }

    pub fn handle_response(&mut self, response: SearchResponse) {
        let field = response.field;
        let outcome = self.binder.apply_response(&mut self.document, response);
        let focused = self.focus == Some(field);

        match outcome {
            ResponseOutcome::Rendered { .. } | ResponseOutcome::Hidden if focused => {
                self.highlighted = None;
            }
            ResponseOutcome::Failed(e) => {
                if focused {
                    self.highlighted = None;
                }
                self.notification.show_error(&e.to_string());
            }
            _ => {}
        }
    }

    pub fn focus_field(&mut self, field: FieldId) {
        let Some(input) = self.binder.field(field).map(|f| f.input) else {
            return;
        };

        for (i, state) in self.inputs.iter_mut().enumerate() {
            state.set_focused(i == field.0);
        }
        self.focus = Some(field);
        self.highlighted = None;

        // Moving focus is a click on the newly focused field
        self.binder.on_document_click(&mut self.document, input);
        let request = self.binder.on_focus(&self.document, field);
        self.dispatch(request);
    }

    pub fn focus_first(&mut self) {
        if !self.binder.is_empty() {
            self.focus_field(FieldId(0));
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.binder.len();
        if count == 0 {
            return;
        }
        let next = match self.focus {
            Some(FieldId(i)) => (i + 1) % count,
            None => 0,
        };
        self.focus_field(FieldId(next));
    }

    pub fn focus_prev(&mut self) {
        let count = self.binder.len();
        if count == 0 {
            return;
        }
        let prev = match self.focus {
            Some(FieldId(i)) => (i + count - 1) % count,
            None => count - 1,
        };
        self.focus_field(FieldId(prev));
    }

    /// Copy the editor text into the document and fire the input listener
    pub fn on_text_changed(&mut self, field: FieldId) {
        let (Some(bound), Some(state)) = (self.binder.field(field), self.inputs.get(field.0)) else {
            return;
        };
        self.document.set_value(bound.input, state.text());
        self.highlighted = None;

        let request = self.binder.on_input(&self.document, field);
        self.dispatch(request);
    }

    /// Rows currently shown for the focused field
    pub fn visible_row_count(&self) -> usize {
        match self.focus {
            Some(field) if self.binder.is_panel_visible(&self.document, field) => self
                .binder
                .field(field)
                .map_or(0, |f| f.rows().len()),
            _ => 0,
        }
    }

    pub fn highlight_next(&mut self) {
        let count = self.visible_row_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1).min(count - 1),
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        let count = self.visible_row_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => i.saturating_sub(1),
            None => count - 1,
        });
    }

    /// Fill the field from a row and submit its form
    pub fn select_row(&mut self, field: FieldId, index: usize) {
        let Some(selection) = self.binder.select_row(&mut self.document, field, index) else {
            return;
        };
        if let Some(state) = self.inputs.get_mut(field.0) {
            state.set_text(&selection.name);
        }
        self.highlighted = None;

        match selection.submission {
            Some(submission) => self.finish(submission),
            None => self.notification.show(&format!("Selected {}", selection.name)),
        }
    }

    /// Submit the focused field's form with whatever was typed
    pub fn submit_focused(&mut self) {
        let Some(field) = self.focus else {
            return;
        };
        let submission = self
            .binder
            .field(field)
            .and_then(|f| f.form)
            .and_then(|form| self.document.submit(form));
        match submission {
            Some(submission) => self.finish(submission),
            None => self.notification.show_error("This field is not inside a form"),
        }
    }

    fn finish(&mut self, submission: FormSubmission) {
        log::debug!("Submitting to {} ({})", submission.action, submission.method);
        self.submission = Some(submission);
        self.should_quit = true;
    }
}
