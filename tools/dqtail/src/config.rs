use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_LINES: usize = 10;

#[derive(clap::Parser)]
#[clap(about = "Print the last lines of the given files or of stdin")]
pub struct CmdLine {
    /// Input files, stdin if empty
    pub files: Vec<String>,

    /// Optional TOML config file
    #[clap(short, long)]
    pub config: Option<String>,

    /// Number of lines to keep
    #[clap(short = 'n', long)]
    pub lines: Option<usize>,

    /// Print the newest line first
    #[clap(short, long)]
    pub reverse: bool,

    #[clap(long, short)]
    pub log_level: Option<tracing::Level>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub lines: Option<usize>,
    #[serde(default)]
    pub reverse: bool,
}

impl Config {
    pub fn load(cmd_line: &CmdLine) -> Result<Self> {
        let mut cfg = match &cmd_line.config {
            Some(path) => Self::parse(
                &fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file from: {}", path))?,
            )
            .with_context(|| format!("failed to parse config file from: {}", path))?,
            None => Config::default(),
        };
        if let Some(n) = cmd_line.lines {
            cfg.lines = Some(n)
        }
        cfg.reverse |= cmd_line.reverse;
        Ok(cfg)
    }

    fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Window size, falling back to the default
    pub fn lines(&self) -> usize {
        self.lines.unwrap_or(DEFAULT_LINES)
    }
}
