//! ovella-core
//!
//! Pure domain types and input validation. No network or async dependency —
//! this is the shared vocabulary of the Ovella system. Model types are
//! exported via `ts-rs` for the TypeScript web and mobile clients.

pub mod error;
pub mod models;
pub mod validate;
