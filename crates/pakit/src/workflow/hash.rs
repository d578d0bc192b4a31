use std::fs::File;
use std::path::Path;

use anyhow::{Context as _, Result};
use pakit_digest::{Digest, hash_bytes, hash_reader};
use pakit_msix::MsixPackage;

use super::Context;

/// Hash the input file, and its msix signature when requested.
///
/// Extraction failures of any kind are recoverable here: they become a
/// warning pair plus a termination request carrying the failure's own exit
/// code. I/O errors while hashing the input file itself are not; those
/// propagate to the executor as fatal.
pub fn hash_file(ctx: &mut Context) -> Result<()> {
    let path = &ctx.args.file;
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let digest = hash_reader(file)
        .with_context(|| format!("failed to read {} while hashing", path.display()))?;

    ctx.reporter.info(&format!("File Hash: {digest}"));

    if ctx.args.msix {
        match signature_digest(path) {
            Ok(digest) => ctx.reporter.info(&format!("Signature Hash: {digest}")),
            Err(err) => {
                ctx.reporter.warn("Failed to calculate msix signature hash.");
                ctx.reporter
                    .warn("Please verify that the input file is a valid, signed msix.");
                ctx.terminate(err.exit_code());
            }
        }
    }

    Ok(())
}

fn signature_digest(path: &Path) -> pakit_msix::Result<Digest> {
    let mut package = MsixPackage::open(path)?;
    let blob = package.signature()?;
    Ok(hash_bytes(&blob))
}
