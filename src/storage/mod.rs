//! Storage layer for Kiro Finance
//!
//! A key-value medium with one key per collection, a JSON file backend with
//! atomic writes, and an in-memory backend.

pub mod backend;
pub mod file_io;
pub mod keys;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use file_io::{decode_json, encode_json, read_text, write_text_atomic};
pub use keys::StorageKey;
