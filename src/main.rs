use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sensorwatch::data::duration::format_duration;
use sensorwatch::{
    events, ui, App, ChannelSource, DataSource, ExportedState, FileSource, Overrides, Settings,
    Theme, ThemeChoice,
};
use sensorwatch_sim::{Clock, DefaultSimulator, SystemClock};

/// Poll interval for live sources and the event loop.
const TICK: Duration = Duration::from_millis(100);

/// Re-read interval for exported files.
const FILE_REFRESH: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "sensorwatch", version)]
#[command(about = "Terminal dashboard for simulated IoT sensor readings and safety alerts")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Time between readings (e.g., "2s", "500ms")
    #[arg(short, long)]
    interval: Option<String>,

    /// Seed for a reproducible sequence of readings
    #[arg(short, long)]
    seed: Option<u64>,

    /// View an exported state file instead of running the simulator
    #[arg(short, long, conflicts_with = "export")]
    file: Option<PathBuf>,

    /// Run without a terminal and write the final state to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Number of cycles to run before exporting (used with --export)
    #[arg(long, default_value = "20")]
    cycles: usize,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?.apply(Overrides {
        interval: args.interval,
        seed: args.seed,
        theme: args.theme,
        log_file: args.log_file,
    });

    init_logging(settings.log_file.as_deref())?;

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_headless(&settings, args.cycles, export_path);
    }

    let theme = Theme::from_choice(settings.theme);

    // Handle file mode
    if let Some(ref path) = args.file {
        return run_with_file(path, theme);
    }

    // Default: live simulator
    run_with_simulator(&settings, theme)
}

/// Install the tracing subscriber. Without a log file nothing is recorded,
/// since the terminal belongs to the TUI.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}

fn new_simulator(seed: Option<u64>) -> DefaultSimulator {
    match seed {
        Some(seed) => DefaultSimulator::seeded(seed),
        None => DefaultSimulator::from_entropy(),
    }
}

/// Run cycles back to back and write the resulting state
fn export_headless(settings: &Settings, cycles: usize, export_path: &Path) -> Result<()> {
    let mut simulator = new_simulator(settings.seed);
    simulator.run_cycles(cycles);

    let exported = ExportedState::new(simulator.into_state(), SystemClock.now_ms());
    exported.write_to(export_path)?;

    info!(
        path = %export_path.display(),
        cycles,
        alerts = exported.summary.alerts,
        "headless export finished"
    );
    println!(
        "Exported {} cycles ({} alerts, overall {}) to: {}",
        cycles,
        exported.summary.alerts,
        exported.summary.overall,
        export_path.display()
    );
    Ok(())
}

/// Run with a file-based data source
fn run_with_file(path: &Path, theme: Theme) -> Result<()> {
    info!(path = %path.display(), "viewing exported state");
    let source = Box::new(FileSource::new(path));
    run_tui(source, theme, FILE_REFRESH)
}

/// Run with a live simulator task
fn run_with_simulator(settings: &Settings, theme: Theme) -> Result<()> {
    let interval = settings.interval()?;

    // The simulator task runs on the runtime's worker threads while the TUI
    // owns the main thread
    let rt = tokio::runtime::Runtime::new()?;
    let handle = rt.block_on(async { new_simulator(settings.seed).start(interval) })?;

    let description = match settings.seed {
        Some(seed) => format!("every {}, seed {}", format_duration(interval), seed),
        None => format!("every {}", format_duration(interval)),
    };
    let source = Box::new(ChannelSource::new(handle, &description));

    // Dropping the source inside run_tui stops the simulator
    run_tui(source, theme, TICK)
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, theme: Theme, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, theme);
    app.terminal_height = terminal.size()?.height;
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

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

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(TICK)? {
            events::handle_event(app, event);
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}
