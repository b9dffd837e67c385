//! lookout - terminal dashboard for reviewing camera events
//!
//! Connects to an NVR-style gateway, lists tracked entities, and browses
//! each entity's linked events through the adaptive list rendering engine
//! in `list`.

mod api;
mod config;
mod http;
mod list;
mod models;
mod tui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use api::Gateway;
use config::{LookoutConfig, TuiTheme};
use tui::app::App;

#[derive(Parser)]
#[command(
    name = "lookout",
    version,
    about = "Terminal dashboard for reviewing camera events from an NVR gateway"
)]
struct Cli {
    /// Gateway URL (overrides config)
    #[arg(long)]
    server: Option<String>,

    /// Alternate config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rows per fetch/page (1-100)
    #[arg(long)]
    page_size: Option<usize>,

    /// Collection size above which lists render windowed
    #[arg(long)]
    threshold: Option<usize>,

    /// Extra rows rendered beyond each viewport edge
    #[arg(long)]
    overscan: Option<usize>,

    /// Estimated row height in terminal cells
    #[arg(long)]
    row_height: Option<u32>,

    /// Theme: mocha, dracula, nord
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LookoutConfig::load_from(path)?,
        None => {
            if !LookoutConfig::exists() {
                log::debug!("no config file found, using defaults");
            }
            LookoutConfig::load()?
        }
    };
    if let Some(server) = cli.server {
        config.gateway.url = server;
    }
    if let Some(page_size) = cli.page_size {
        config.list.page_size = page_size;
    }
    if let Some(threshold) = cli.threshold {
        config.list.virtualization_threshold = threshold;
    }
    if let Some(overscan) = cli.overscan {
        config.list.overscan = overscan;
    }
    if let Some(row_height) = cli.row_height {
        config.list.row_height = row_height;
    }
    if let Some(theme) = &cli.theme {
        config.tui.theme = match theme.as_str() {
            "mocha" => TuiTheme::Mocha,
            "dracula" => TuiTheme::Dracula,
            "nord" => TuiTheme::Nord,
            other => bail!("unknown theme: {other}"),
        };
    }

    let gateway = Gateway::new(&config.gateway.url);
    let app = App::new(gateway, &config);

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = run(&mut terminal, app);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// Main event/draw loop
///
/// Single-threaded and event-driven: gateway responses are polled
/// non-blocking at the top of each tick, every frame draws from the latest
/// state, and input is drained after the draw.
fn run(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    while app.running {
        app.poll_fetch();
        app.advance_frame();
        terminal.draw(|frame| tui::ui::render(frame, &mut app))?;
        tui::event::handle_events(&mut app)?;
    }
    Ok(())
}
