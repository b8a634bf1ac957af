//! Command-line options

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Values the original demo page seeded its list with
pub const DEMO_VALUES: [&str; 5] = ["0", "1", "2", "3", "4"];

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Settings file to use instead of the default location
    pub config: Option<PathBuf>,
    /// Values appended before the session starts
    pub seed: Vec<String>,
    /// Write the effective settings back to disk and exit
    pub write_config: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
usage: linkscape [--config <path>] [--seed a,b,c] [--demo] [--write-config]

Reads commands from stdin; type 'help' once running.";

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().context("--config needs a path")?;
                    options.config = Some(PathBuf::from(path));
                }
                "--seed" | "-s" => {
                    let values = args.next().context("--seed needs a comma-separated list")?;
                    options
                        .seed
                        .extend(values.split(',').map(|v| v.trim().to_owned()));
                }
                "--demo" => options
                    .seed
                    .extend(DEMO_VALUES.iter().map(|v| v.to_string())),
                "--write-config" => options.write_config = true,
                "--help" | "-h" => options.help = true,
                other => bail!("unexpected argument '{other}'\n{USAGE}"),
            }
        }

        Ok(options)
    }
}
