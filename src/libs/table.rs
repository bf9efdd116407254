use std::io::Write;

use super::matrix::ScoringMatrix;

/// One line of the generated lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRecord {
    /// An explicit `(b'row', b'col') => Some(score),` arm.
    Pair {
        row: String,
        col: String,
        score: String,
    },
    /// The trailing `(_, _) => None,` arm that makes the match total.
    Wildcard,
}

impl std::fmt::Display for TableRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableRecord::Pair { row, col, score } => {
                write!(f, "(b'{}', b'{}') => Some({}),", row, col, score)
            }
            TableRecord::Wildcard => write!(f, "(_, _) => None,"),
        }
    }
}

/// All records of the table, lazily.
///
/// Pairs follow row insertion order, then each row's column order; the
/// wildcard comes last. The matrix is only read, so the iterator can be
/// rebuilt any number of times.
pub fn records(matrix: &ScoringMatrix) -> impl Iterator<Item = TableRecord> + '_ {
    matrix
        .rows()
        .flat_map(|(row, cols)| {
            cols.iter().map(move |(col, score)| TableRecord::Pair {
                row: row.clone(),
                col: col.clone(),
                score: score.clone(),
            })
        })
        .chain(std::iter::once(TableRecord::Wildcard))
}

/// Write the whole table, one record per line.
pub fn write_table<W: Write>(writer: &mut W, matrix: &ScoringMatrix) -> std::io::Result<()> {
    for record in records(matrix) {
        writeln!(writer, "{}", record)?;
    }

    Ok(())
}
