use sha2::digest::Digest as ShaDigest;

use crate::Digest;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Digest;
}

pub struct Sha256Hasher(sha2::Sha256);

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self) -> Digest {
        let bytes: [u8; Digest::LEN] = self.0.finalize().into();
        Digest::from(bytes)
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self(sha2::Sha256::new())
    }
}

/// One-shot digest of an in-memory buffer.
pub fn hash_bytes(data: &[u8]) -> Digest {
    let bytes: [u8; Digest::LEN] = sha2::Sha256::digest(data).into();
    Digest::from(bytes)
}
