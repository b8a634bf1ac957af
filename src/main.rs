//! Linkscape - Linked list visualizer
//!
//! Keeps a singly linked list and an in-memory scene in sync, driven by
//! line commands on stdin.

mod cli;
mod command;
mod session;
mod settings;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Options, USAGE};
use crate::command::Command;
use crate::session::{Reply, Session};
use crate::settings::Settings;

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let settings = match &options.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    if options.write_config {
        match &options.config {
            Some(path) => settings.save_to(path)?,
            None => {
                settings.save()?;
            }
        }
        return Ok(());
    }

    info!("Starting Linkscape...");
    let mut session = Session::new(&settings);
    for value in &options.seed {
        if !session.add(value) {
            warn!("Skipping blank seed value");
        }
    }

    run(&mut session, io::stdin().lock(), io::stdout().lock())
}

/// Read commands until `quit` or end of input.
fn run(session: &mut Session, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?
            == 0
        {
            break;
        }

        // A line that is not UTF-8 is skipped; the session keeps going.
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("Skipping command that is not valid UTF-8");
            writeln!(output, "skipped a line that is not valid UTF-8")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match session.execute(command)? {
            Reply::Text(text) => writeln!(output, "{text}")?,
            Reply::Quit => break,
        }
        output.flush()?;
    }

    info!(nodes = session.list().len(), "Session ended");
    Ok(())
}
