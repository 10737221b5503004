// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod chart;
mod config;
mod data;
mod error;
mod events;
mod scale;
mod source;
mod ui;

use app::App;
use chart::{Chart, ChartState};
use config::ChartConfig;
use scale::Zone;
use source::Resource;

#[derive(Parser, Debug)]
#[command(name = "latency-scatter")]
#[command(about = "Render a scatterplot of latency samples over time")]
struct Args {
    /// Latency resource: a path, a file:// or http(s):// URL, or - for stdin
    #[arg(default_value = "latencies.json")]
    resource: String,

    /// Where to write the chart
    #[arg(short, long, default_value = "scatterplot.svg", conflicts_with = "view")]
    output: PathBuf,

    /// Wrap the SVG in an HTML page
    #[arg(long, conflicts_with = "view")]
    html: bool,

    /// Chart config file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Outer chart width in pixels, margins included
    #[arg(long)]
    width: Option<f64>,

    /// Outer chart height in pixels, margins included
    #[arg(long)]
    height: Option<f64>,

    /// Label time ticks in UTC instead of local time
    #[arg(long)]
    utc: bool,

    /// Show the chart in an interactive terminal viewer
    #[arg(short, long)]
    view: bool,

    /// Write logs to this file (only used with --view)
    #[arg(long, requires = "view")]
    log_file: Option<PathBuf>,

    /// Print sample count and axis domains as JSON after rendering
    #[arg(long, conflicts_with = "view")]
    summary: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = ChartConfig::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.utc {
        config.timezone = Zone::Utc;
    }
    config.validate()?;

    init_logging(&config.log_level, args.view, args.log_file.as_deref())?;

    let runtime = tokio::runtime::Runtime::new()?;

    if args.view {
        let resource = Resource::parse(&args.resource)?;
        run_tui(&runtime, resource, config)?;
        return Ok(ExitCode::SUCCESS);
    }

    runtime.block_on(render_to_file(&args, config))
}

/// Install the tracing subscriber.
///
/// The viewer owns the terminal, so without `--log-file` it logs nowhere.
fn init_logging(level: &str, view: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None if view => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

/// Load the resource, render it, and write the surface to disk.
///
/// A load failure still writes the placeholder surface, then exits non-zero.
async fn render_to_file(args: &Args, config: ChartConfig) -> Result<ExitCode> {
    let mut chart = Chart::initialize(config);
    let state = chart.load(&args.resource).await;

    let document = if args.html {
        chart.to_html()
    } else {
        chart.to_svg()
    };
    tokio::fs::write(&args.output, document)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary(&chart, args))?);
    }

    match state {
        ChartState::Rendered => {
            tracing::info!(
                output = %args.output.display(),
                markers = chart.surface().markers.len(),
                "wrote chart"
            );
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}

/// Export structure for `--summary`.
fn summary(chart: &Chart, args: &Args) -> serde_json::Value {
    let domains = chart.scales().map(|s| {
        serde_json::json!({
            "x_ms": [s.x.domain().min, s.x.domain().max],
            "y_ms": [s.y.domain().min, s.y.domain().max],
        })
    });
    serde_json::json!({
        "resource": args.resource,
        "output": args.output.display().to_string(),
        "state": chart.state().label(),
        "samples": chart.points().len(),
        "markers": chart.surface().markers.len(),
        "domains": domains,
        "error": chart.error(),
    })
}

/// Run the TUI for the given resource
fn run_tui(runtime: &tokio::runtime::Runtime, resource: Resource, config: ChartConfig) -> Result<()> {
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
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app; the fetch starts immediately
    let mut app = App::new(resource, config, runtime.handle().clone());

    // Run the main loop
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
    while app.running {
        app.poll_load();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
