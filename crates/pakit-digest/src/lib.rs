//! Content digest primitives.
//!
//! Provides incremental SHA-256 hashing over byte buffers and arbitrary
//! `Read` sources without buffering whole inputs in memory.
//!
//! # Key Features
//!
//! - **Incremental**: computes digests as data streams through a fixed buffer
//! - **Content-only**: stream and buffer forms agree for identical bytes
//! - **Extensible**: minimal `Hasher` trait allows custom implementations
//!
//! # Example
//!
//! ```
//! use pakit_digest::{hash_bytes, hash_reader};
//!
//! let from_buffer = hash_bytes(b"hello world");
//! let from_stream = hash_reader(&b"hello world"[..]).unwrap();
//!
//! assert_eq!(from_buffer, from_stream);
//! assert_eq!(from_buffer.to_hex().len(), 64);
//! ```

pub use self::digest::Digest;
pub use self::hasher::{Hasher, Sha256Hasher, hash_bytes};
pub use self::reader::hash_reader;

mod digest;
mod hasher;
mod reader;
