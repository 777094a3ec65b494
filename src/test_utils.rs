#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::binder::{FieldId, SearchRequest, SearchResponse};
    use crate::config::Config;
    use crate::dom::Page;
    use crate::search::SuggestionItem;

    /// App over the default three-mode page, no worker attached
    pub fn test_app() -> App {
        App::new(&Page::default_page(), &Config::default()).unwrap()
    }

    /// App whose requests land in the returned receiver and whose responses
    /// are fed through the returned sender
    pub fn test_app_with_channels() -> (
        App,
        UnboundedReceiver<SearchRequest>,
        mpsc::Sender<SearchResponse>,
    ) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Every request sent so far
    pub fn drain_requests(rx: &mut UnboundedReceiver<SearchRequest>) -> Vec<SearchRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    /// Answer the latest request for `field` with `names`, as if the backend
    /// returned `{name, avatar: "/img/<name>.png"}` for each
    pub fn respond(app: &mut App, field: FieldId, names: &[&str]) {
        let request_id = app
            .binder
            .field(field)
            .and_then(|f| f.latest_request_id())
            .unwrap_or_default();
        let items = names
            .iter()
            .map(|name| SuggestionItem::new(name, &format!("/img/{}.png", name.to_lowercase())))
            .collect();
        app.handle_response(SearchResponse {
            field,
            request_id,
            result: Ok(items),
        });
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
