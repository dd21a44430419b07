pub mod catalog;
pub mod manager;
pub mod models;
pub mod schema;
pub mod users;

/// Outcome of a conflict-do-nothing insert, derived from the statement's
/// affected-row count. A duplicate key is ordinary control flow, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created,
    Duplicate,
}

impl InsertOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            InsertOutcome::Duplicate
        } else {
            InsertOutcome::Created
        }
    }
}

/// Outcome of a delete-by-key statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        }
    }
}
