mod action;
mod app;
mod command;
mod config;
mod domain;
mod ui;
mod update;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use action::Action;
use app::App;
use command::{Command, execute_command};
use config::AppConfig;
use domain::llm::{DEFAULT_MODEL, GEMINI_API_BASE, ModelEndpoint, RECOMMEND_TIMEOUT};
use domain::steam::STEAM_API_BASE;
use domain::store::ConfigStore;

const LOG_FILE: &str = "steamrec.log";

#[derive(Parser)]
#[command(name = "steamrec")]
#[command(about = "Steam library recommender - ask Gemini what to play from the games you own")]
struct Cli {
    /// Directory holding config.json and the log file
    #[arg(long, default_value = "Config")]
    config_dir: PathBuf,

    /// Gemini model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A failure here resurfaces when the user saves
    let _ = std::fs::create_dir_all(&cli.config_dir);
    init_logging(&cli.config_dir);

    let config = AppConfig {
        config_dir: cli.config_dir,
        steam_base_url: STEAM_API_BASE.to_string(),
        model: ModelEndpoint {
            base_url: GEMINI_API_BASE.to_string(),
            model: cli.model,
            timeout: RECOMMEND_TIMEOUT,
        },
    };

    let mut app = App::from_loaded(ConfigStore::new(&config.config_dir).load());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Log to a file in the config dir; the terminal belongs to the UI
fn init_logging(dir: &Path) {
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    tracing::info!(config_dir = %config.config_dir.display(), model = %config.model.model, "started");

    loop {
        terminal.draw(|f| ui::render(f, app, config))?;

        if app.should_quit {
            break;
        }

        // Worker results first, then at most one key press
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    actions.push(Action::Input {
                        code: key.code,
                        modifiers: key.modifiers,
                    });
                }
            }
        }

        for action in actions {
            for command in update::update(app, action, config) {
                spawn_command(command, config.clone(), tx.clone());
            }
        }
    }

    Ok(())
}

/// Run a command off the UI loop and post its result back
fn spawn_command(command: Command, config: AppConfig, tx: mpsc::UnboundedSender<Action>) {
    tokio::spawn(async move {
        if let Some(action) = execute_command(command, &config).await {
            // Receiver only goes away on shutdown
            let _ = tx.send(action);
        }
    });
}
