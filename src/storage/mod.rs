//! Storage layer for fdd
//!
//! Provides the binary budget record plus JSON settings files, both written
//! atomically with automatic directory creation.
//!
//! No lock is taken: two invocations racing on the same record can lose an
//! update. Atomic replacement only guarantees a reader never sees a torn
//! record.

pub mod file_io;
pub mod state;

pub use file_io::{read_json, write_json_atomic};
pub use state::StateStore;
