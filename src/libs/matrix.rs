use std::io::BufRead;

use indexmap::IndexMap;
use thiserror::Error;

/// An amino acid symbol, kept as an opaque token.
pub type Residue = String;

/// Structural errors raised while reading a matrix file.
///
/// All variants are fatal. Row positions are 1-based, matching the
/// positions a human sees in the file's data section.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no `residue` header line seen before the first data row")]
    MissingHeader,
    #[error("header doesn't match residue for residue {0}")]
    RowMismatch(usize),
    #[error("Length mismatch between header and data row {0}")]
    LengthMismatch(usize),
    #[error("residue {0} is repeated in the data rows")]
    DuplicateResidue(Residue),
}

/// A fully validated substitution matrix.
///
/// Rows keep the order in which they appeared in the file; each row's
/// columns keep header order. Scores stay in their literal textual form.
#[derive(Debug, Clone, Default)]
pub struct ScoringMatrix {
    rows: IndexMap<Residue, IndexMap<Residue, String>>,
}

impl ScoringMatrix {
    /// Number of row residues.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in insertion order, each with its columns in header order.
    pub fn rows(&self) -> impl Iterator<Item = (&Residue, &IndexMap<Residue, String>)> {
        self.rows.iter()
    }

    /// Total number of (row, column) pairs.
    pub fn n_pairs(&self) -> usize {
        self.rows.values().map(|cols| cols.len()).sum()
    }
}

/// Incremental parser for the `residue`-header matrix format.
///
/// Feed lines one at a time (already stripped of line terminators):
///
/// * `#` lines are comments and ignored.
/// * A line starting with the token `residue` (re)declares the column
///   header. A re-declaration replaces the previous header and leaves the
///   row position untouched, so a file may resume data rows against a new
///   column order mid-stream.
/// * Anything else is a data row: the first field is the row residue, the
///   rest are scores aligned positionally to the header.
///
/// Data rows must appear in exactly header order, one row per column.
/// The first structural violation wins; nothing is recoverable.
#[derive(Debug, Default)]
pub struct MatrixParser {
    header: Vec<Residue>,
    matrix: IndexMap<Residue, IndexMap<Residue, String>>,
    row_idx: usize,
}

impl MatrixParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line. Comments and header lines always succeed.
    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        if line.starts_with('#') {
            return Ok(());
        }

        if line.starts_with("residue") {
            self.header = line.split_whitespace().skip(1).map(str::to_string).collect();
            return Ok(());
        }

        // Data row. Blank lines land here too; they fail the checks below.
        if self.header.is_empty() {
            return Err(ParseError::MissingHeader);
        }

        let mut fields = line.split_whitespace();
        let residue = fields.next().unwrap_or_default().to_string();
        let scores: Vec<&str> = fields.collect();

        match self.header.get(self.row_idx) {
            Some(expected) if *expected == residue => {}
            _ => return Err(ParseError::RowMismatch(self.row_idx + 1)),
        }

        if scores.len() != self.header.len() {
            return Err(ParseError::LengthMismatch(self.row_idx + 1));
        }

        if self.matrix.contains_key(&residue) {
            return Err(ParseError::DuplicateResidue(residue));
        }

        let cols: IndexMap<Residue, String> = self
            .header
            .iter()
            .cloned()
            .zip(scores.iter().map(|s| s.to_string()))
            .collect();

        self.matrix.insert(residue, cols);
        self.row_idx += 1;

        Ok(())
    }

    /// Finish parsing and hand over the accumulated matrix.
    pub fn finish(self) -> ScoringMatrix {
        ScoringMatrix { rows: self.matrix }
    }

    /// Parse a whole stream in one pass, stopping at the first error.
    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<ScoringMatrix> {
        let mut parser = Self::new();

        for line in reader.lines() {
            let line = line?;
            parser.feed(line.trim_end())?;
        }

        Ok(parser.finish())
    }
}
