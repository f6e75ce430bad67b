//! FluxPool TUI: five-tab terminal dashboard with vim-style navigation.
//!
//! Tabs:
//! 1. Trades: live synthetic feed, newest first
//! 2. Spot Positions: share and close actions per row
//! 3. Curve Positions: spot rows relabelled onto curve pools
//! 4. Holders: token holders with sell-through progress
//! 5. Top Traders: ranked wallets

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use fluxpool_core::store::FileStore;
use fluxpool_core::{Dashboard, DashboardConfig};
use fluxpool_tui::{App, input, persistence, ui};

/// Input poll timeout, also the cooperative tick period.
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "fluxpool", version, about = "FluxPool live trading dashboard")]
struct Args {
    /// TOML config file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for persisted broadcasts.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Master seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (level from RUST_LOG, default info).
    #[arg(long, default_value = "fluxpool.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file);

    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let store_dir = args.store.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fluxpool")
    });
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fluxpool")
        .join("state.json");

    let dashboard = Dashboard::new(&config, FileStore::new(&store_dir))
        .context("building dashboard from config")?;
    let mut app = App::new(dashboard);
    persistence::apply(&mut app, persistence::load(&state_path));
    app.dashboard.activate(Utc::now());
    log::info!("dashboard started, broadcasts in {}", store_dir.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    app.dashboard.deactivate();
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        log::warn!("could not save state to {}: {e}", state_path.display());
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // 1. Render
        let now = Utc::now();
        terminal.draw(|f| ui::draw(f, app, now))?;

        // 2. Poll for input events
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Utc::now());
            }
        }

        // 3. Advance timers
        app.tick(Utc::now());

        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Route logs to a file so they never tear the alternate screen.
fn init_logging(path: &Path) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        // No writable log file: run silent.
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
