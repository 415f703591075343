//! Domain types and rules for the item service.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these definitions.

pub mod error;
pub mod item;
pub mod types;
