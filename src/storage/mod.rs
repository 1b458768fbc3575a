//! Storage layer for the expense tracker
//!
//! Provides the JSON document codec and whole-file persistence with atomic
//! writes and automatic directory creation.

pub mod codec;
pub mod file_io;
pub mod store;

pub use codec::{deserialize, parse, replay, serialize};
pub use file_io::{read_document, write_document_atomic};
pub use store::ExpenseStore;
