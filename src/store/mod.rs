//! Store module for userdb
//!
//! Owns the persisted user collection:
//! - record: the user record type and collection helpers
//! - json_store: whole-file load/save against a flat JSON document
//! - errors: storage error types

mod errors;
mod json_store;
mod record;

pub use errors::{StoreError, StoreResult};
pub use json_store::UserStore;
pub use record::{email_exists, find_by_id, next_id, position_by_id, User};
