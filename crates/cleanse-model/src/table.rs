//! In-memory tabular dataset mutated by the cleaning stages.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;

/// Row identity: the positional index assigned at load time.
///
/// Ids are never renumbered; dropping rows leaves the surviving ids
/// untouched, so later stages can re-filter an already reduced table
/// without confusing index with position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Numeric view of the cell. `Text` parses on the fly; `DateTime` and
    /// `Missing` have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::DateTime(_) | Cell::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical textual form used for export and report samples.
    /// `Missing` renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(v) => v.to_string(),
            Cell::Float(v) => v.to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Missing => String::new(),
        }
    }

    /// Type-tagged key for duplicate detection. Floats compare by bit
    /// pattern so that NaN equals NaN, the way duplicate removal expects.
    pub fn dedup_key(&self) -> String {
        match self {
            Cell::Text(s) => format!("t:{s}"),
            Cell::Int(v) => format!("i:{v}"),
            Cell::Float(v) => format!("f:{:x}", v.to_bits()),
            Cell::DateTime(dt) => format!("d:{dt}"),
            Cell::Missing => "m".to_string(),
        }
    }
}

/// The dominant value kind of a column, reported as its dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Int,
    Float,
    DateTime,
    /// No non-missing cells.
    Empty,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Text => "text",
            ColumnKind::Int => "int",
            ColumnKind::Float => "float",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub cells: Vec<Cell>,
}

/// Ordered columns by name and position, plus rows with stable ids.
///
/// Invariant: every row holds exactly `columns.len()` cells, positionally
/// parallel to `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    next_id: usize,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a row, assigning the next load-order id.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, cells });
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn drop_column_at(&mut self, index: usize) {
        self.columns.remove(index);
        for row in &mut self.rows {
            row.cells.remove(index);
        }
    }

    /// Drop a column by name. Returns false when the name does not exist.
    pub fn drop_column(&mut self, name: &str) -> bool {
        match self.column_index(name) {
            Some(index) => {
                self.drop_column_at(index);
                true
            }
            None => false,
        }
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Row) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    pub fn drop_rows(&mut self, ids: &BTreeSet<RowId>) {
        self.rows.retain(|row| !ids.contains(&row.id));
    }

    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row.cells[index])
    }

    /// Replace every cell of one column. The replacement must be parallel
    /// to the current rows.
    pub fn set_column_cells(&mut self, index: usize, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.cells[index] = cell;
        }
    }

    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..self.rows.len().min(n)]
    }

    pub fn column_kind(&self, index: usize) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for cell in self.column_cells(index) {
            let observed = match cell {
                Cell::Text(_) => ColumnKind::Text,
                Cell::Int(_) => ColumnKind::Int,
                Cell::Float(_) => ColumnKind::Float,
                Cell::DateTime(_) => ColumnKind::DateTime,
                Cell::Missing => continue,
            };
            if kind == ColumnKind::Empty {
                kind = observed;
            } else if kind != observed {
                // Mixed content reads as text.
                return ColumnKind::Text;
            }
        }
        kind
    }
}
