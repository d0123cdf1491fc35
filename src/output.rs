//! Output sinks for rendered text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Img2CharError, Result};

/// Write rendered text to `out` verbatim and flush.
pub fn print_to<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(Img2CharError::StdoutWriteFailure)
}

/// Write rendered text to `path`, truncating any existing file.
///
/// The file is opened through `path` itself, so symlinks are followed and an
/// existing file keeps its permissions. New files get the process umask.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let failure = |source: std::io::Error| Img2CharError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(failure)?;
    file.write_all(text.as_bytes()).map_err(failure)?;
    file.sync_all().map_err(failure)?;

    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
