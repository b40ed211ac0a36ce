use std::{
    fmt::Display,
    io::{self, Write},
};

use numlab_core::{Renderer, output::Table};

const DEFAULT_WIDTH: usize = 14;
const DEFAULT_PRECISION: usize = 6;

/// A [`Renderer`] that writes plain text to any [`io::Write`].
///
/// Values are written as `label: value` lines. Tables are written under
/// their title with right-aligned, fixed-precision columns; cells missing from
/// a short column are left blank.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    precision: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the number of decimals used for table cells.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn column_width(&self, header: &str) -> usize {
        DEFAULT_WIDTH.max(header.len() + 2).max(self.precision + 8)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn value(&mut self, label: &str, value: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{label}: {value}")
    }

    fn table(&mut self, table: &Table) -> io::Result<()> {
        let widths: Vec<usize> = table.headers.iter().map(|h| self.column_width(h)).collect();

        writeln!(self.out)?;
        writeln!(self.out, "{}", table.title)?;
        for (header, &width) in table.headers.iter().zip(&widths) {
            write!(self.out, "{header:>width$}")?;
        }
        writeln!(self.out)?;

        for index in 0..table.rows() {
            for (cell, &width) in table.row(index).zip(&widths) {
                match cell {
                    Some(v) => write!(self.out, "{v:>width$.prec$}", prec = self.precision)?,
                    None => write!(self.out, "{:width$}", "")?,
                }
            }
            writeln!(self.out)?;
        }
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TextRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = TextRenderer::new(Vec::new()).with_precision(3);
        f(&mut renderer).expect("writing to a Vec cannot fail");
        String::from_utf8(renderer.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn writes_labeled_values() {
        let text = render(|r| {
            r.value("Solution", &1.5)?;
            r.value("Status", &"converged")
        });

        assert_eq!(text, "Solution: 1.5\nStatus: converged\n");
    }

    #[test]
    fn writes_aligned_tables_with_blank_short_cells() {
        let table = Table::new("Nodes", &["x", "y"])
            .column(vec![0.0, 1.0])
            .column(vec![2.5]);
        let text = render(|r| r.table(&table));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Nodes");
        assert_eq!(lines[2], format!("{:>14}{:>14}", "x", "y"));
        assert_eq!(lines[3], format!("{:>14}{:>14}", "0.000", "2.500"));
        assert_eq!(lines[4], format!("{:>14}{:14}", "1.000", ""));
    }
}
