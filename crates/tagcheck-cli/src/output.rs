//! Tab-aligned diagnostic output
//!
//! Lines are buffered until `flush` so that every column lines up across the
//! whole run. Cells are padded with tab characters, never spaces.

use std::io::{self, Write};
use tagcheck_core::Diagnostic;

const TAB_WIDTH: usize = 8;

/// Buffers diagnostics and writes them as aligned columns
pub struct TabSink<W: Write> {
    out: W,
    rows: Vec<Vec<String>>,
}

impl<W: Write> TabSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    /// Queue one diagnostic line
    pub fn push(&mut self, diagnostic: &Diagnostic) {
        let line = diagnostic.to_string();
        self.rows.push(line.split('\t').map(str::to_string).collect());
    }

    /// Write every queued line in order and clear the buffer
    pub fn flush(&mut self) -> io::Result<()> {
        let widths = column_widths(&self.rows);

        for row in self.rows.drain(..) {
            let last = row.len().saturating_sub(1);
            let mut line = String::new();
            for (idx, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if idx < last {
                    let padded = (widths[idx] / TAB_WIDTH + 1) * TAB_WIDTH;
                    let gap = padded - cell.chars().count();
                    line.extend(std::iter::repeat('\t').take(gap.div_ceil(TAB_WIDTH)));
                }
            }
            writeln!(self.out, "{}", line)?;
        }

        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Widest cell per column, ignoring each row's trailing cell
fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = Vec::new();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(row.len().saturating_sub(1)) {
            if widths.len() <= idx {
                widths.push(0);
            }
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }
    widths
}
