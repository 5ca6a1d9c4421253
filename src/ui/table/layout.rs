// SPDX-License-Identifier: MPL-2.0
//! Layout pass: turns a data slice and its mappers into header, body and
//! footer rows without touching any widget.

use super::cell::{Cell, Row};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

type RowMapper<'d, T, C> = Box<dyn Fn(&T, usize) -> Row<C> + 'd>;
type KeyExtractor<'d, T> = Box<dyn Fn(&T, usize) -> String + 'd>;

/// Identity of a body row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Produced by the key function.
    Keyed(String),
    /// Positional fallback when no key function is set.
    Index(usize),
    /// The empty-state placeholder.
    Placeholder,
}

impl RowKey {
    /// Stable numeric id for iced's keyed column.
    pub fn id(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// A body row together with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow<C> {
    pub key: RowKey,
    pub row: Row<C>,
}

impl<C> BodyRow<C> {
    pub fn is_placeholder(&self) -> bool {
        self.key == RowKey::Placeholder
    }
}

/// Result of the layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<C> {
    pub head: Option<Row<C>>,
    pub body: Vec<BodyRow<C>>,
    pub footer: Option<Row<C>>,
}

/// Table builder over a borrowed data slice.
pub struct Table<'d, T, C> {
    data: &'d [T],
    head: Option<Row<C>>,
    body: Option<RowMapper<'d, T, C>>,
    key: Option<KeyExtractor<'d, T>>,
    footer: Option<Row<C>>,
    empty: Option<Cell<C>>,
}

impl<T, C> std::fmt::Debug for Table<'_, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.data.len())
            .field("has_head", &self.head.is_some())
            .field("has_body", &self.body.is_some())
            .field("has_key", &self.key.is_some())
            .field("has_footer", &self.footer.is_some())
            .field("has_empty", &self.empty.is_some())
            .finish()
    }
}

impl<'d, T, C> Table<'d, T, C> {
    pub fn new(data: &'d [T]) -> Self {
        Self {
            data,
            head: None,
            body: None,
            key: None,
            footer: None,
            empty: None,
        }
    }

    #[must_use]
    pub fn head(mut self, row: Row<C>) -> Self {
        self.head = Some(row);
        self
    }

    /// Sets the mapper building one body row per element.
    #[must_use]
    pub fn body(mut self, mapper: impl Fn(&T, usize) -> Row<C> + 'd) -> Self {
        self.body = Some(Box::new(mapper));
        self
    }

    /// Sets the row identity function. Without it rows are keyed by index.
    #[must_use]
    pub fn key(mut self, extractor: impl Fn(&T, usize) -> String + 'd) -> Self {
        self.key = Some(Box::new(extractor));
        self
    }

    #[must_use]
    pub fn footer(mut self, row: Row<C>) -> Self {
        self.footer = Some(row);
        self
    }

    /// Cell shown across the whole header width when `data` is empty.
    #[must_use]
    pub fn empty(mut self, cell: impl Into<Cell<C>>) -> Self {
        self.empty = Some(cell.into());
        self
    }

    /// Computes the rows to render.
    ///
    /// The placeholder only appears when the data is empty and both a header
    /// and an empty cell are set; its span is the header's cell count.
    pub fn layout(self) -> Layout<C> {
        let Self {
            data,
            head,
            body,
            key,
            footer,
            empty,
        } = self;

        let rows = if data.is_empty() {
            match (&head, empty) {
                (Some(head), Some(cell)) => {
                    let span = u16::try_from(head.len()).unwrap_or(u16::MAX);
                    vec![BodyRow {
                        key: RowKey::Placeholder,
                        row: Row {
                            cells: vec![cell.span(span)],
                        },
                    }]
                }
                _ => Vec::new(),
            }
        } else {
            match body {
                Some(mapper) => data
                    .iter()
                    .enumerate()
                    .map(|(index, item)| BodyRow {
                        key: match &key {
                            Some(extract) => RowKey::Keyed(extract(item, index)),
                            None => RowKey::Index(index),
                        },
                        row: mapper(item, index),
                    })
                    .collect(),
                None => Vec::new(),
            }
        };

        Layout {
            head,
            body: rows,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Row<String> {
        Row::new(["Name".to_string(), "Qty".to_string()])
    }

    fn mapper(item: &&str, index: usize) -> Row<String> {
        Row::new([item.to_string(), index.to_string()])
    }

    #[test]
    fn maps_every_element_in_order() {
        let data = ["a", "b", "c"];
        let layout = Table::new(&data).head(header()).body(mapper).layout();

        assert_eq!(layout.body.len(), 3);
        let firsts: Vec<_> = layout
            .body
            .iter()
            .map(|r| r.row.cells[0].content.as_str())
            .collect();
        assert_eq!(firsts, ["a", "b", "c"]);
        assert_eq!(layout.body[2].row.cells[1].content, "2");
    }

    #[test]
    fn rows_keyed_by_index_without_key_function() {
        let data = ["a", "b"];
        let layout = Table::new(&data).body(mapper).layout();
        let keys: Vec<_> = layout.body.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys, [RowKey::Index(0), RowKey::Index(1)]);
    }

    #[test]
    fn rows_keyed_by_key_function() {
        let data = ["a", "b"];
        let layout = Table::new(&data)
            .body(mapper)
            .key(|item, _| format!("row-{item}"))
            .layout();
        assert_eq!(layout.body[1].key, RowKey::Keyed("row-b".into()));
    }

    #[test]
    fn empty_data_with_head_and_empty_cell_spans_header() {
        let data: [&str; 0] = [];
        let layout = Table::new(&data)
            .head(header())
            .body(mapper)
            .empty("Nothing here".to_string())
            .layout();

        assert_eq!(layout.body.len(), 1);
        let row = &layout.body[0];
        assert!(row.is_placeholder());
        assert_eq!(row.row.len(), 1);
        assert_eq!(row.row.cells[0].col_span, 2);
        assert_eq!(row.row.cells[0].content, "Nothing here");
    }

    #[test]
    fn empty_data_without_empty_cell_has_no_rows() {
        let data: [&str; 0] = [];
        let layout = Table::new(&data).head(header()).body(mapper).layout();
        assert!(layout.body.is_empty());
        assert!(layout.head.is_some());
    }

    #[test]
    fn empty_data_without_head_has_no_placeholder() {
        let data: [&str; 0] = [];
        let layout = Table::new(&data)
            .empty("Nothing here".to_string())
            .layout();
        assert!(layout.body.is_empty());
    }

    #[test]
    fn no_mapper_means_no_body_rows() {
        let data = ["a", "b"];
        let layout: Layout<String> = Table::new(&data).head(header()).layout();
        assert!(layout.body.is_empty());
    }

    #[test]
    fn placeholder_ignored_when_data_present() {
        let data = ["a"];
        let layout = Table::new(&data)
            .head(header())
            .body(mapper)
            .empty("Nothing here".to_string())
            .layout();
        assert_eq!(layout.body.len(), 1);
        assert!(!layout.body[0].is_placeholder());
    }

    #[test]
    fn footer_is_independent_of_empty_state() {
        let data: [&str; 0] = [];
        let layout = Table::new(&data)
            .footer(Row::new(["Total: 0".to_string()]))
            .layout();
        assert!(layout.footer.is_some());
        assert!(layout.body.is_empty());
    }

    #[test]
    fn row_key_ids_distinguish_variants() {
        assert_eq!(RowKey::Index(1).id(), RowKey::Index(1).id());
        assert_ne!(RowKey::Index(1).id(), RowKey::Keyed("1".into()).id());
        assert_ne!(RowKey::Placeholder.id(), RowKey::Index(0).id());
    }
}
