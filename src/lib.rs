//! userdb - a minimal user registry served over HTTP from a flat JSON file

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
