// src/output.rs
use std::borrow::Cow;
use std::io::{self, Write};

use crate::specs::support::SupportRow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// Aligned columns with a header
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl Format {
    pub fn delim(&self) -> Option<char> {
        match self {
            Format::Csv => Some(','),
            Format::Tsv => Some('\t'),
            Format::Table | Format::Json => None,
        }
    }
}

/* ---------------- Rows ---------------- */

pub fn write_rows<W: Write>(mut w: W, rows: &[SupportRow], format: Format) -> io::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut w, rows)?;
            writeln!(w)
        }
        Format::Table => write_table(w, rows),
        Format::Csv | Format::Tsv => {
            let sep = format.delim().unwrap_or(',');
            write_row(&mut w, &SupportRow::HEADERS, sep)?;
            for r in rows {
                write_row(&mut w, &r.cells(), sep)?;
            }
            Ok(())
        }
    }
}

/// Plain column layout, two spaces between columns.
fn write_table<W: Write>(mut w: W, rows: &[SupportRow]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    let mut widths = SupportRow::HEADERS.map(|h| h.chars().count());
    for r in rows {
        for (i, cell) in r.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = widths.map(|n| "-".repeat(n));
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();

    write_padded(&mut w, &SupportRow::HEADERS, &widths)?;
    write_padded(&mut w, &rule, &widths)?;
    for r in rows {
        write_padded(&mut w, &r.cells(), &widths)?;
    }
    Ok(())
}

fn write_padded<W: Write>(mut w: W, cells: &[&str], widths: &[usize]) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            writeln!(w, "{cell}")?;
        } else {
            write!(w, "{cell:<width$}  ", width = widths[i])?;
        }
    }
    Ok(())
}

/* ---------------- Slugs ---------------- */

pub fn write_slugs<W: Write>(mut w: W, slugs: &[String], format: Format) -> io::Result<()> {
    if format == Format::Json {
        serde_json::to_writer_pretty(&mut w, slugs)?;
        return writeln!(w);
    }
    for s in slugs {
        writeln!(w, "{s}")?;
    }
    Ok(())
}

/* ---------------- Delimited ---------------- */

/// Quote a cell only when the separator, a quote or a line break would break it.
fn quote_cell(cell: &str, sep: char) -> Cow<'_, str> {
    if cell.contains([sep, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Write one delimited row, newline-terminated.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    let sep_str: &str = sep.encode_utf8(&mut buf);
    let line: Vec<Cow<'_, str>> = row.iter().map(|c| quote_cell(c, sep)).collect();
    writeln!(w, "{}", line.join(sep_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_commas() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "Yes, starting in Windows 10 build 1607", "say \"hi\""], ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "a,\"Yes, starting in Windows 10 build 1607\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b, c"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\tb, c\n");
    }
}
