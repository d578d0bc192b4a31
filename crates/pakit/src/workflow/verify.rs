use anyhow::Result;

use super::Context;

/// Exit code when the input path does not name a readable regular file.
pub const FILE_NOT_FOUND: i32 = 2;

/// Verify the input path before any step tries to read it.
///
/// Later steps assume this ran first and may open the file without
/// re-checking existence.
pub fn verify_file(ctx: &mut Context) -> Result<()> {
    let path = &ctx.args.file;

    if !path.exists() {
        ctx.reporter
            .warn(&format!("File does not exist: {}", path.display()));
        ctx.terminate(FILE_NOT_FOUND);
    } else if !path.is_file() {
        ctx.reporter
            .warn(&format!("Path is not a file: {}", path.display()));
        ctx.terminate(FILE_NOT_FOUND);
    }

    Ok(())
}
