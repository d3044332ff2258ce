//! Spatial UI demo host
//!
//! Drives the interaction engine with simulated hands and draws the result
//! as characters, seen from the viewer's side.
//!
//! Controls:
//! - Arrows: move the selected hand, w/s: push it forward or pull it back
//! - Tab: switch hands, Space: pinch, g: grip, t: toggle tracking
//! - f: toggle hand rays for far interaction, r: reset hands
//! - While a text field holds the keyboard, keys type into it; Esc leaves
//! - q, Esc or Ctrl+C: quit
//!
//! Usage:
//!   spatial-ui-demo                     # Interactive, logs to a file
//!   spatial-ui-demo --script            # Scripted session, logs to stderr
//!   spatial-ui-demo --config ui.toml    # Spacing settings from TOML

mod backends;
mod host;
mod scene;
mod script;
mod simulator;

use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use spatial_ui::{Handed, UiSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

use backends::{LogRenderer, TerminalView};
use host::DemoHost;
use simulator::SimAction;

const FRAME_TIME: Duration = Duration::from_millis(33);
const LOG_FILE: &str = "spatial-ui-demo.log";

/// Drive the spatial UI with simulated hands
#[derive(Debug, Parser)]
#[command(name = "spatial-ui-demo", version, about)]
struct Args {
    /// Run a fixed scripted session instead of the interactive view
    #[arg(long)]
    script: bool,

    /// Spacing settings as TOML; keys left out keep their defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => UiSettings::load(path).with_context(|| format!("Loading {}", path.display()))?,
        None => UiSettings::default(),
    };

    if args.script {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
        run_script(settings)
    } else {
        // The terminal belongs to the view, so logs go to a file
        let log_path = env::temp_dir().join(LOG_FILE);
        let file = File::create(&log_path).with_context(|| format!("Creating {}", log_path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        info!(log = %log_path.display(), "Starting interactive demo");
        run_interactive(settings)
    }
}

fn run_script(settings: UiSettings) -> Result<()> {
    let mut host = DemoHost::new(settings, LogRenderer::default());
    let report = script::run(&mut host)?;
    host.renderer.flush(host.ui.frame_count());
    info!(
        pings = report.pings,
        greeted = ?report.greeted,
        bell_rings = report.bell_rings,
        cube_moved = report.cube_moved,
        "Script finished"
    );
    Ok(())
}

fn run_interactive(settings: UiSettings) -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let result = interactive_loop(settings);

    // Restore the terminal even if the loop failed
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    result
}

fn interactive_loop(settings: UiSettings) -> Result<()> {
    let mut host = DemoHost::new(settings, TerminalView::default());
    let mut stdout = io::stdout();
    let mut text = Vec::new();
    let mut last_frame = Instant::now();

    loop {
        let timeout = FRAME_TIME.checked_sub(last_frame.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let typing = host.typing();
                match host.sim.process_key(key, typing) {
                    SimAction::Quit => break,
                    SimAction::Text(event) => text.push(event),
                    SimAction::Moved | SimAction::None => {}
                }
            }
        }
        if last_frame.elapsed() < FRAME_TIME {
            continue;
        }

        host.frame(&text);
        text.clear();
        let status = status_line(&host);
        let hands = [host.sim.hand(Handed::Left), host.sim.hand(Handed::Right)];
        host.renderer.present(&mut stdout, hands, &status)?;
        last_frame = Instant::now();
    }
    info!(frames = host.ui.frame_count(), "Demo closed");
    Ok(())
}

fn status_line(host: &DemoHost<TerminalView>) -> String {
    let selected = host.sim.selected();
    let hand = host.sim.hand(selected);
    format!(
        "{:?} hand z={:+.3} pinch={} grip={} far={} keyboard={:?} sound={:?} | pings {} name '{}'",
        selected,
        hand.fingertip.z,
        hand.pinched,
        hand.gripped,
        host.sim.far(),
        host.typing().then_some(host.keyboard.context),
        host.audio.last,
        host.scene.pings,
        host.scene.name,
    )
}
