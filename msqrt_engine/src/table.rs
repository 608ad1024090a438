//! SRT digit selection tables

use crate::ConfigError;

/// The digit selection table of the reference parameter set (radix 4,
/// `alpha = beta = 3`). Row `r` covers the residual region `origin - r`,
/// columns are the root estimate regions. The entries of 4 in the top rows lie
/// outside of the digit set and abort a run in the rare cases they are
/// selected.
const SET_ONE: [[i8; 4]; 33] = [
    [4, 4, 4, 3],
    [4, 4, 4, 3],
    [4, 4, 4, 3],
    [4, 4, 4, 3],
    [4, 4, 3, 3],
    [4, 4, 3, 3],
    [4, 4, 3, 3],
    [4, 4, 3, 3],
    [4, 3, 3, 3],
    [4, 3, 3, 3],
    [4, 3, 3, 3],
    [4, 3, 3, 3],
    [3, 3, 3, 3],
    [3, 3, 3, 2],
    [3, 3, 3, 2],
    [3, 3, 3, 2],
    [3, 3, 3, 2],
    [3, 3, 2, 2],
    [3, 3, 2, 2],
    [3, 2, 2, 2],
    [3, 2, 2, 2],
    [3, 2, 2, 1],
    [2, 2, 2, 1],
    [2, 2, 2, 1],
    [2, 2, 2, 1],
    [2, 1, 1, 1],
    [2, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
];

/// A row-major table of signed digits indexed by residual region (rows) and
/// root estimate region (columns). It is immutable after construction, and
/// only its shape is validated. Whether an entry is inside of the digit set
/// is checked when it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TableRows", into = "TableRows")
)]
pub struct SrtTable {
    rows: usize,
    cols: usize,
    entries: Vec<i8>,
}

impl SrtTable {
    /// Creates a table from row-major `entries`
    ///
    /// # Errors
    ///
    /// `EmptyTable` if `rows` or `cols` is zero, and `TableShape` if
    /// `entries.len() != rows * cols`
    pub fn new(rows: usize, cols: usize, entries: Vec<i8>) -> Result<Self, ConfigError> {
        if (rows == 0) || (cols == 0) {
            return Err(ConfigError::EmptyTable)
        }
        if rows.checked_mul(cols) != Some(entries.len()) {
            return Err(ConfigError::TableShape {
                rows,
                cols,
                entries: entries.len(),
            })
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// Creates a table from a list of rows, which must all have the same
    /// nonzero length
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut entries = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ConfigError::TableShape {
                    rows: rows.len(),
                    cols,
                    entries: entries.len() + row.len(),
                })
            }
            entries.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, entries)
    }

    /// The 33 by 4 table of the reference radix 4 parameter set
    pub fn set_one() -> Self {
        Self {
            rows: SET_ONE.len(),
            cols: SET_ONE[0].len(),
            entries: SET_ONE.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the entry at `row` and `col`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<i8> {
        if (row >= self.rows) || (col >= self.cols) {
            None
        } else {
            self.entries.get((row * self.cols) + col).copied()
        }
    }

    /// Iterates over the rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i8]> + '_ {
        self.entries.chunks(self.cols)
    }
}

impl Default for SrtTable {
    fn default() -> Self {
        Self::set_one()
    }
}

/// Rewrites the table column used at one iteration. The columns are counted
/// from 1: at `iteration`, a lookup that lands in column `from_column` uses
/// column `to_column` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct IndexOverride {
    pub iteration: usize,
    pub from_column: usize,
    pub to_column: usize,
}

impl IndexOverride {
    pub fn new(iteration: usize, from_column: usize, to_column: usize) -> Self {
        Self {
            iteration,
            from_column,
            to_column,
        }
    }
}

/// The serialized form of a `SrtTable`, a list of rows
#[cfg(feature = "serde_support")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
struct TableRows(Vec<Vec<i8>>);

#[cfg(feature = "serde_support")]
impl TryFrom<TableRows> for SrtTable {
    type Error = ConfigError;

    fn try_from(rows: TableRows) -> Result<Self, Self::Error> {
        SrtTable::from_rows(&rows.0)
    }
}

#[cfg(feature = "serde_support")]
impl From<SrtTable> for TableRows {
    fn from(table: SrtTable) -> Self {
        TableRows(table.iter_rows().map(|row| row.to_vec()).collect())
    }
}
