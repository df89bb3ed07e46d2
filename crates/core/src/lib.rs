//! Domain core for the community threads service.
//!
//! Holds the `Thread` / `Strand` records, their validation rules, the
//! store ports that persistence adapters implement, and the five
//! operations the HTTP boundary exposes. Nothing in here performs I/O
//! directly; every operation receives its store handle as an argument.

pub mod error;
pub mod store;
pub mod strand;
pub mod thread;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
