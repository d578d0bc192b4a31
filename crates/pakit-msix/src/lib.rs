//! Signature extraction for msix package containers.
//!
//! An msix package is a zip container carrying a detached PKCS#7 signature
//! as a dedicated part. This crate opens a container, locates that part,
//! and hands its raw bytes to the caller. Nothing else about the package
//! is parsed, validated, or modified.

pub use self::error::{Error, Result};
pub use self::package::{MsixPackage, SIGNATURE_PART};

mod error;
mod package;
