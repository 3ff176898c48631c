//! User record type and collection helpers
//!
//! The persisted document is an ordered sequence of these records. Order
//! reflects insertion history: create appends, update edits in place,
//! delete removes.

use serde::{Deserialize, Serialize};

/// A single user record as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, monotonically assigned identifier. Never reused.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Computes the id for a new record: last id + 1, or 1 on an empty
/// collection. Deleted ids are never reused because assignment only looks
/// at the current tail.
pub fn next_id(users: &[User]) -> u64 {
    match users.last() {
        Some(last) => last.id + 1,
        None => 1,
    }
}

/// Returns whether any record already holds the given email.
pub fn email_exists(users: &[User], email: &str) -> bool {
    users.iter().any(|u| u.email == email)
}

/// Finds a record by id. First match wins (ids are unique by invariant).
pub fn find_by_id(users: &[User], id: u64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

/// Finds the position of a record by id, for in-place update and removal.
pub fn position_by_id(users: &[User], id: u64) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}
