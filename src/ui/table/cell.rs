// SPDX-License-Identifier: MPL-2.0
//! Row and cell descriptors.

use iced::alignment::Horizontal;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<C> {
    pub content: C,
    /// Number of columns covered. Zero is rendered as one.
    pub col_span: u16,
    pub align: Horizontal,
}

impl<C> Cell<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            col_span: 1,
            align: Horizontal::Left,
        }
    }

    #[must_use]
    pub fn span(mut self, col_span: u16) -> Self {
        self.col_span = col_span;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Horizontal) -> Self {
        self.align = align;
        self
    }
}

impl<C> From<C> for Cell<C> {
    fn from(content: C) -> Self {
        Self::new(content)
    }
}

/// An ordered list of cells forming one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<C> {
    pub cells: Vec<Cell<C>>,
}

impl<C> Row<C> {
    pub fn new(cells: impl IntoIterator<Item = impl Into<Cell<C>>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of cells, regardless of their spans.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Adds a cell at the end of the row.
    #[must_use]
    pub fn push(mut self, cell: impl Into<Cell<C>>) -> Self {
        self.cells.push(cell.into());
        self
    }
}

impl<C> Default for Row<C> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<C> FromIterator<Cell<C>> for Row<C> {
    fn from_iter<I: IntoIterator<Item = Cell<C>>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_defaults_to_single_left_aligned_column() {
        let cell = Cell::new("Name");
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.align, Horizontal::Left);
    }

    #[test]
    fn builders_override_span_and_alignment() {
        let cell = Cell::new(42).span(3).align(Horizontal::Right);
        assert_eq!(cell.col_span, 3);
        assert_eq!(cell.align, Horizontal::Right);
    }

    #[test]
    fn row_accepts_plain_contents() {
        let row: Row<&str> = Row::new(["a", "b"]).push(Cell::new("c").span(2));
        assert_eq!(row.len(), 3);
        assert_eq!(row.cells[2].col_span, 2);
        assert!(Row::<&str>::default().is_empty());
    }
}
