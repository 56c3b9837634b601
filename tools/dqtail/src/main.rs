use std::fs::File;
use std::io::{self, BufReader};
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use config::{CmdLine, Config};
use window::LineWindow;

pub mod config;
pub mod window;

fn run(cmd_line: &CmdLine, cfg: &Config) -> Result<()> {
    tracing::debug!(lines = cfg.lines(), reverse = cfg.reverse, "start");
    let mut window = LineWindow::new(cfg.lines());
    if cmd_line.files.is_empty() {
        window.feed("<stdin>", io::stdin().lock())?;
    } else {
        for path in &cmd_line.files {
            let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
            window.feed(path, BufReader::new(file))?;
        }
    }
    tracing::debug!(kept = window.len(), "write window");
    window.write_to(&mut io::stdout().lock(), cfg.reverse)
}

fn main() {
    let cmd_line = CmdLine::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(cmd_line.log_level.unwrap_or(tracing::Level::ERROR))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {}", e);
    }
    let res = Config::load(&cmd_line).and_then(|cfg| run(&cmd_line, &cfg));
    if let Err(e) = res {
        tracing::error!("{:?}", e);
        exit(1)
    }
}
