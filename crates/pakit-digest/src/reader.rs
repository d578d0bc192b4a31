use std::io::{self, ErrorKind, Read};

use crate::{Digest, Hasher, Sha256Hasher};

const BUF_LEN: usize = 64 * 1024;

/// Digest an entire `Read` source incrementally.
///
/// Memory use is bounded by a fixed buffer regardless of input length.
/// An I/O fault mid-stream returns the error; no partial digest is produced.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha256Hasher::new();
    let mut buf = vec![0u8; BUF_LEN];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(hasher.finalize())
}
