//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Records are append-only,
//! so there are no update or delete methods.

pub mod strand_repo;
pub mod thread_repo;

pub use strand_repo::StrandRepo;
pub use thread_repo::ThreadRepo;
