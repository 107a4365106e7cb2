//! Loading samples from comma- or tab-separated text.
//!
//! The text must start with a header row naming the [`SCAN_FIELD`] (input)
//! and [`IDEA_FIELD`] (output) columns. Names are matched exactly and
//! case-sensitively, in any order; other columns are ignored. Every
//! following non-blank row contributes one [`Sample`].
//!
//! ```
//! use tone_lut::parse_samples;
//!
//! let samples = parse_samples("Idea,Scan\n255,235.68\n0,4.44\n").unwrap();
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples.first().input, 4.44);
//! ```

use std::borrow::Cow;

use crate::error::{FormatError, LutError, ValidationError};
use crate::sample::{Sample, SampleSet};
use crate::table::LookupTable;

/// Header name of the input column.
pub const SCAN_FIELD: &str = "Scan";
/// Header name of the output column.
pub const IDEA_FIELD: &str = "Idea";

/// How much leading text is inspected when the header alone is ambiguous.
const SNIFF_BYTES: usize = 4096;

/// Field separator of a tabular source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    /// Determine the delimiter of `text`.
    ///
    /// A delimiter absent from the header never wins. When the header
    /// contains both, the one that splits every sampled line into the same
    /// number of cells as the header is chosen, falling back to the one
    /// that occurs more often in the header.
    pub fn detect(text: &str) -> Result<Self, FormatError> {
        let sampled = sniff_lines(text);
        let header = sampled.first().ok_or(FormatError::UndetectableDelimiter)?;

        let commas = count_unquoted(header, ',');
        let tabs = count_unquoted(header, '\t');

        match (commas, tabs) {
            (0, 0) => Err(FormatError::UndetectableDelimiter),
            (_, 0) => Ok(Delimiter::Comma),
            (0, _) => Ok(Delimiter::Tab),
            _ => {
                let consistent = |d: char, expected: usize| {
                    sampled.iter().all(|line| count_unquoted(line, d) == expected)
                };
                match (consistent(',', commas), consistent('\t', tabs)) {
                    (true, false) => Ok(Delimiter::Comma),
                    (false, true) => Ok(Delimiter::Tab),
                    _ if commas > tabs => Ok(Delimiter::Comma),
                    _ if tabs > commas => Ok(Delimiter::Tab),
                    _ => Err(FormatError::UndetectableDelimiter),
                }
            }
        }
    }
}

/// Non-blank whole lines within the first [`SNIFF_BYTES`] of `text`.
///
/// The first non-blank line is always included, however long.
fn sniff_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut consumed = 0;
    for line in text.lines() {
        consumed += line.len() + 1;
        if consumed > SNIFF_BYTES && !lines.is_empty() {
            break;
        }
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Split `line` on `delimiter`, treating delimiters inside double quotes
/// as literal text. An escaped quote (`""`) toggles twice and so keeps the
/// cell quoted.
fn split_cells(line: &str, delimiter: char) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        if c == '"' {
            quoted = !quoted;
        } else if c == delimiter && !quoted {
            cells.push(&line[start..i]);
            start = i + c.len_utf8();
        }
    }
    cells.push(&line[start..]);
    cells
}

fn count_unquoted(line: &str, delimiter: char) -> usize {
    split_cells(line, delimiter).len() - 1
}

/// Remove one pair of surrounding double quotes and unescape `""`.
fn unquote(cell: &str) -> Cow<'_, str> {
    match cell.strip_prefix('"').and_then(|c| c.strip_suffix('"')) {
        Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(cell),
    }
}

/// Data cells tolerate whitespace around the (optionally quoted) value.
fn clean_cell(cell: &str) -> Cow<'_, str> {
    unquote(cell.trim())
}

/// Parse comma- or tab-separated `Scan`/`Idea` text into a sample set.
///
/// # Errors
///
/// - [`FormatError::UndetectableDelimiter`] if the layout is not comma or tab separated
/// - [`ValidationError::MissingFields`] listing every absent header name
/// - [`ValidationError::MissingValue`], [`ValidationError::InvalidNumber`] or
///   [`ValidationError::NonFinite`] for the first bad data cell
/// - [`ValidationError::EmptySampleSet`] if there are no data rows
pub fn parse_samples(text: &str) -> Result<SampleSet, LutError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = Delimiter::detect(text)?.as_char();

    let mut rows = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = rows.next().ok_or(ValidationError::EmptySampleSet)?;
    // Header names are exact apart from optional quoting.
    let columns: Vec<Cow<'_, str>> = split_cells(header, delimiter)
        .into_iter()
        .map(unquote)
        .collect();
    let position = |name: &str| columns.iter().position(|c| c == name);

    let (scan_col, idea_col) = match (position(SCAN_FIELD), position(IDEA_FIELD)) {
        (Some(scan), Some(idea)) => (scan, idea),
        (scan, idea) => {
            let mut missing = Vec::new();
            if scan.is_none() {
                missing.push(SCAN_FIELD);
            }
            if idea.is_none() {
                missing.push(IDEA_FIELD);
            }
            return Err(ValidationError::MissingFields { missing }.into());
        }
    };

    let mut samples = Vec::new();
    for (line, row) in rows {
        let cells = split_cells(row, delimiter);
        let input = parse_cell(&cells, scan_col, line, SCAN_FIELD)?;
        let output = parse_cell(&cells, idea_col, line, IDEA_FIELD)?;
        samples.push(Sample::new(input, output));
    }

    Ok(SampleSet::new(samples)?)
}

fn parse_cell(
    cells: &[&str],
    index: usize,
    line: usize,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let raw = cells
        .get(index)
        .map(|c| clean_cell(c))
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::MissingValue { line, field })?;

    let value: f64 = raw.parse().map_err(|source| ValidationError::InvalidNumber {
        line,
        field,
        value: raw.clone().into_owned(),
        source,
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NonFinite {
            line: Some(line),
            field,
            value,
        });
    }
    Ok(value)
}

/// Parse `text` and build its lookup table in one step.
pub fn parse_table(text: &str) -> Result<LookupTable, LutError> {
    let samples = parse_samples(text)?;
    Ok(LookupTable::build(&samples))
}
