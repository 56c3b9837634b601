use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use blockq_rs_util::collections::BlockDeque;

/// The last `n` lines seen across all inputs
pub struct LineWindow {
    lines: Option<BlockDeque<String>>,
}

impl LineWindow {
    pub fn new(n: usize) -> Self {
        // a deque with max length 0 is unbounded, so an empty window keeps no deque at all
        Self {
            lines: (n > 0).then(|| BlockDeque::with_max_len(n)),
        }
    }

    /// Read all lines from `reader`, keeping only the newest ones
    pub fn feed<R: BufRead>(&mut self, name: &str, reader: R) -> Result<()> {
        let mut count = 0u64;
        for line in reader.lines() {
            let line = line.with_context(|| format!("failed to read from {}", name))?;
            count += 1;
            if let Some(lines) = &mut self.lines {
                lines.push_back(line);
            }
        }
        tracing::debug!(input = name, lines = count, "input consumed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lines.as_ref().map_or(0, BlockDeque::len)
    }

    /// Write the window to `out`, oldest line first unless `reverse` is set
    pub fn write_to<W: Write>(self, out: &mut W, reverse: bool) -> Result<()> {
        let Some(mut lines) = self.lines else {
            return Ok(());
        };
        let next = |lines: &mut BlockDeque<String>| {
            if reverse {
                lines.pop_back()
            } else {
                lines.pop_front()
            }
        };
        while let Some(line) = next(&mut lines) {
            writeln!(out, "{}", line).context("failed to write output")?;
        }
        Ok(())
    }
}
