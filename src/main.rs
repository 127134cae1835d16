mod app;
mod domain;
mod error;
mod input;
mod persistence;
mod report;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_data_dir, init_local_data_dir, kv_dir, load_settings, log_file, report_file,
    save_settings, settings_file, DirKvStore, PlannerData, PlannerStorage, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long to wait for a key before redrawing and autosaving
const TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "goalplan")]
#[command(about = "A terminal year planner for 2026 goals", long_about = None)]
struct Cli {
    /// Data directory. Defaults to a local .goalplan, else ~/.goalplan
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .goalplan directory in the current directory
    Init,
    /// Write a JSON backup of all planner data
    Export {
        /// Output file path. Defaults to goal-planner-backup-YYYY-MM-DD.json
        /// in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Merge a JSON backup into the planner. Fields present in the file replace current data.
    Import {
        /// Backup file to read
        file: PathBuf,
    },
    /// Generate a markdown progress report
    Report {
        /// Date to report as of (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        save_settings(settings_file(&data_dir), &Settings::default())?;
        println!("Initialized planner directory: {}", data_dir.display());
        println!();
        println!("goalplan will now use this local directory for storage.");
        println!("Run 'goalplan' to open the planner.");
        return Ok(());
    }

    let data_dir = ensure_data_dir(cli.dir.as_deref())?;
    let settings = load_settings(settings_file(&data_dir))?;
    init_logging(&data_dir, &settings)?;
    info!(data_dir = %data_dir.display(), "starting goalplan");

    match cli.command {
        Some(Commands::Export { output }) => run_export(&data_dir, &settings, output),
        Some(Commands::Import { file }) => run_import(&data_dir, &file),
        Some(Commands::Report { date, output }) => run_report(&data_dir, date, output),
        Some(Commands::Init) | None => run_tui(&data_dir, &settings),
    }
}

/// Log to a file in the data directory; the terminal belongs to the TUI.
/// GOALPLAN_LOG wins over the settings filter.
fn init_logging(data_dir: &Path, settings: &Settings) -> Result<()> {
    let path = log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("GOALPLAN_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}

/// Open the planner storage and load it, printing any slots that had to be reset
fn open_storage(
    data_dir: &Path,
    today: NaiveDate,
) -> Result<(PlannerStorage<DirKvStore>, PlannerData)> {
    let mut storage = PlannerStorage::new(DirKvStore::open(kv_dir(data_dir))?);
    let (data, errors) = storage.load(today);
    for err in &errors {
        eprintln!("Warning: {}", err);
    }
    Ok((storage, data))
}

fn run_export(data_dir: &Path, settings: &Settings, output: Option<PathBuf>) -> Result<()> {
    let (_, data) = open_storage(data_dir, Local::now().date_naive())?;
    let now = Utc::now();

    let path = match output {
        Some(path) => {
            persistence::export_to_file(&path, &data, now)?;
            path
        }
        None => persistence::export_to_dir(&settings.export_dir()?, &data, now)?,
    };
    println!("Backup written: {}", path.display());
    Ok(())
}

fn run_import(data_dir: &Path, file: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    let (mut storage, mut data) = open_storage(data_dir, today)?;

    let backup = persistence::read_backup(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    let applied = persistence::apply_backup(&mut data, backup);
    storage.save_fields(&data, &applied, today)?;

    info!(path = %file.display(), fields = applied.len(), "imported backup");
    if applied.is_empty() {
        println!("Backup contained no fields; nothing changed.");
    } else {
        println!("Imported {} field(s): {:?}", applied.len(), applied);
    }
    Ok(())
}

fn run_report(data_dir: &Path, date: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let report_date = if let Some(date_str) = date {
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
    } else {
        Local::now().date_naive()
    };

    let (_, data) = open_storage(data_dir, report_date)?;
    let output_path = output.unwrap_or_else(|| report_file(data_dir, report_date));

    println!("Generating report for {}...", report_date);
    let report_path = report::generate_report(&data, report_date, &output_path)?;
    println!("Report generated: {}", report_path.display());
    Ok(())
}

fn run_tui(data_dir: &Path, settings: &Settings) -> Result<()> {
    let kv = DirKvStore::open(kv_dir(data_dir))?;
    let export_dir = settings.export_dir()?;
    let mut app = AppState::load(Box::new(kv), Local::now().date_naive(), export_dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    app.save();
    info!("goalplan exited");

    if let Err(err) = &result {
        warn!(error = %err, "event loop ended with an error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        app.refresh_today(Local::now().date_naive());

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Autosave if needed
        if app.needs_save() {
            app.save();
        }
    }
}
