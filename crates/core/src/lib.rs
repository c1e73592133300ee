//! Functional core for the bookquery service.
//!
//! Everything in this crate is pure: domain types, predicate filtering, error
//! enums, cache keys, snapshot serialization and the traits the server crate
//! implements. No I/O happens here.

pub mod cache;
pub mod catalog;
pub mod serde;
pub mod storage;
