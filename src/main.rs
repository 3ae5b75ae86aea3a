use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use airwatch::{
    events, export_json, ui, App, DashboardData, DataSource, FileSource, SampleSource, Settings,
    Theme, ThemeChoice,
};
use airwatch_types::sample_readings;

#[derive(Parser, Debug)]
#[command(name = "airwatch")]
#[command(about = "Terminal dashboard for air-quality sensor readings")]
struct Args {
    /// JSON file of readings, newest first (default: built-in sample)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// File poll interval (e.g., "1s", "500ms", "10m")
    #[arg(short, long)]
    refresh: Option<String>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Show times in UTC instead of local time
    #[arg(long)]
    utc: bool,

    /// Export the derived dashboard to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(ref file) = self.file {
            settings.file = Some(file.clone());
        }
        if let Some(ref refresh) = self.refresh {
            settings.refresh = refresh.clone();
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.utc {
            settings.utc = true;
        }
        settings
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let settings = args.apply(Settings::load(args.config.as_deref())?);
    let refresh = settings.refresh_interval()?;
    info!(?settings, "starting airwatch");

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(&settings, export_path);
    }

    let source: Box<dyn DataSource> = match settings.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(SampleSource::new()),
    };

    let theme = Theme::from_choice(settings.theme);
    let app = App::new(source, settings.zone(), theme).with_refresh_interval(refresh);
    run_tui(app)
}

/// Send tracing output to a file; the terminal belongs to the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("airwatch=info,airwatch_types=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
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

    app.reload_data();

    let result = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                // Terminal will redraw on next iteration
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= app.refresh_interval {
            app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Export the derived dashboard to a JSON file
fn export_to_file(settings: &Settings, export_path: &Path) -> Result<()> {
    let data = match settings.file {
        Some(ref path) => DashboardData::load(path, settings.zone())?,
        None => DashboardData::from_batch(sample_readings(), settings.zone()),
    };

    let Some(export) = export_json(&data) else {
        bail!("no readings to export");
    };

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(export_path, json)
        .with_context(|| format!("failed to write {}", export_path.display()))?;

    println!("Exported dashboard to: {}", export_path.display());
    Ok(())
}
