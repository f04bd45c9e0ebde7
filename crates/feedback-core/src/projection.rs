//! Roadmap Column Projection
//!
//! Partitions the flat feedback list into the three roadmap columns.
//! Columns are never stored; they are rebuilt from `FeedbackItem::status`
//! whenever the list changes.

use crate::model::{FeedbackItem, Status};

/// Roadmap column order (left to right)
pub const ROADMAP_STATUSES: [Status; 3] = [Status::Planned, Status::InProgress, Status::Live];

/// One roadmap column: every item in it has `status == self.status`
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: Status,
    pub items: Vec<FeedbackItem>,
}

impl Column {
    fn empty(status: Status) -> Self {
        Self { status, items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The three roadmap columns, in `ROADMAP_STATUSES` order
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    columns: [Column; 3],
}

fn slot(status: Status) -> Option<usize> {
    match status {
        Status::Planned => Some(0),
        Status::InProgress => Some(1),
        Status::Live => Some(2),
        Status::Suggestion => None,
    }
}

impl Columns {
    pub fn get(&self, status: Status) -> Option<&Column> {
        slot(status).map(|i| &self.columns[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Item count of a column (0 for non-roadmap statuses)
    pub fn count(&self, status: Status) -> usize {
        self.get(status).map_or(0, Column::len)
    }
}

/// Partition `items` by status, preserving input order within each column.
/// Items whose status is not a roadmap status are left out.
pub fn project(items: &[FeedbackItem]) -> Columns {
    let mut columns = ROADMAP_STATUSES.map(Column::empty);
    for item in items {
        if let Some(i) = slot(item.status) {
            columns[i].items.push(item.clone());
        }
    }
    Columns { columns }
}
