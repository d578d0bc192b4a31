use std::fs::File;
use std::io::{ErrorKind, Read, Seek};
use std::path::Path;

use zip::result::ZipError;

use crate::error::{Error, Result};

/// Name of the detached signature part inside an msix container.
pub const SIGNATURE_PART: &str = "AppxSignature.p7x";

/// A parsed msix container.
///
/// Msix packages are zip containers; the central directory is parsed once
/// at open time. The underlying reader is dropped with the package value,
/// on success and failure paths alike.
pub struct MsixPackage<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl MsixPackage<File> {
    /// Open a package file from disk.
    ///
    /// A file that cannot be opened maps to `Error::Io`; a file that opens
    /// but does not parse as a container maps to `Error::NotAPackage`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> MsixPackage<R> {
    /// Parse a package from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        match zip::ZipArchive::new(reader) {
            Ok(archive) => Ok(Self { archive }),
            Err(ZipError::Io(err)) => Err(Error::Io(err)),
            Err(_) => Err(Error::NotAPackage),
        }
    }

    /// Extract the embedded signature blob.
    ///
    /// Returns the stored bytes of the signature part exactly as written,
    /// with no transformation. Ownership passes to the caller; the package
    /// retains no reference to the blob.
    pub fn signature(&mut self) -> Result<Vec<u8>> {
        let mut part = match self.archive.by_name(SIGNATURE_PART) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => return Err(Error::Unsigned),
            Err(ZipError::Io(err)) => return Err(Error::Io(err)),
            Err(_) => return Err(Error::NotAPackage),
        };

        let mut blob = Vec::with_capacity(part.size() as usize);
        part.read_to_end(&mut blob).map_err(|err| match err.kind() {
            // Truncated or undecompressable entry data. flate2 reports a
            // corrupt deflate stream as InvalidInput, checksum and structural
            // failures come through as InvalidData or UnexpectedEof.
            ErrorKind::UnexpectedEof | ErrorKind::InvalidData | ErrorKind::InvalidInput => {
                Error::Corrupted
            }
            _ => Error::Io(err),
        })?;

        Ok(blob)
    }
}
