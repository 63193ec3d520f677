use anyhow::Context;
use crossterm::terminal;
use crossterm::tty::IsTty;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_hilo::{GameConfig, Session};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Wrapped output never exceeds this many columns, even on wider terminals.
const MAX_WIDTH: u16 = 80;
/// Pause after each evaluated guess, so feedback is readable before the
/// screen is redrawn.
const FEEDBACK_PACE: Duration = Duration::from_millis(400);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let interactive = stdout.is_tty();
    let config = GameConfig {
        width: detect_width(),
        pace: if interactive {
            FEEDBACK_PACE
        } else {
            Duration::ZERO
        },
        clear_screen: interactive,
    };
    tracing::debug!(?config, interactive, "starting session");

    let mut session = Session::new(
        io::stdin().lock(),
        stdout.lock(),
        StdRng::from_entropy(),
        config,
    );
    session.run().context("the game could not continue")
}

/// The terminal width capped at [`MAX_WIDTH`], or the cap itself when the
/// width cannot be determined (e.g. redirected output).
fn detect_width() -> usize {
    terminal::size()
        .map(|(columns, _rows)| columns.min(MAX_WIDTH))
        .unwrap_or(MAX_WIDTH) as usize
}
