//! Observability module for userdb

mod logger;

pub use logger::{Logger, Severity};
