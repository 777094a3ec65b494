use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use charsearch::app::App;
use charsearch::config::{ConfigResult, load_config};
use charsearch::dom::Page;
use charsearch::search::{SearchClient, spawn_worker};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Character-name autocomplete in the terminal
///
/// Fill a guessing form with suggestions from a character search endpoint.
/// Picking a suggestion submits the form and prints it as JSON.
#[derive(Parser, Debug)]
#[command(name = "charsearch")]
#[command(version)]
#[command(about = "Character-name autocomplete backed by a search endpoint", long_about = None)]
struct Args {
    /// Config file (default: ~/.config/charsearch/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Page description in TOML (default: the built-in three-mode page)
    #[arg(long, value_name = "FILE")]
    page: Option<PathBuf>,

    /// Base URL of the search server, overrides the config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Mode sent for fields that do not declare one, overrides the config
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Print the page description as TOML and exit
    #[arg(long)]
    dump_page: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());
    if let Some(base_url) = args.base_url {
        config.search.base_url = base_url;
    }
    if let Some(mode) = args.mode {
        config.binder.default_mode = mode;
    }

    let page = match &args.page {
        Some(path) => Page::load(path)
            .wrap_err_with(|| format!("Failed to load page {}", path.display()))?,
        None => Page::default_page(),
    };

    if args.dump_page {
        print!("{}", page.to_toml()?);
        return Ok(());
    }

    let mut app = App::new(&page, &config)?;
    if let Some(warning) = warning {
        app.notification.show_error(&warning);
    }

    match SearchClient::new(&config.search) {
        Ok(client) => {
            let (response_tx, response_rx) = mpsc::channel();
            let request_tx = spawn_worker(client, response_tx);
            app.set_channels(request_tx, response_rx);
        }
        Err(e) => app.notification.show_error(&e.to_string()),
    }
    app.focus_first();

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| run(terminal, &mut app));

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;

    if let Some(submission) = &app.submission {
        println!("{}", submission.to_json());
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_responses();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(EVENT_POLL_INTERVAL)?;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Log to a file in the temp directory; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join("charsearch-debug.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}
