//! Database row structs.
//!
//! Each submodule holds a `FromRow` struct matching one table and the
//! conversions to and from the core record type.

pub mod strand;
pub mod thread;
