//! Profiler hook: export a trace into a temporary file and upload it.
//!
//! The temporary file only lives for the duration of the upload.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::uploader::Uploader;

/// Calls `export` with a fresh temporary path, uploads whatever it wrote, and
/// reports the outcome on `out`. Returns the destination key when the upload
/// succeeded.
pub fn upload_exported_trace<W, F>(
    uploader: &Uploader,
    out: &mut W,
    user: &str,
    export: F,
) -> Result<Option<String>>
where
    W: Write,
    F: FnOnce(&Path) -> Result<()>,
{
    let file = tempfile::Builder::new()
        .prefix("trace_")
        .suffix(".json")
        .tempfile()
        .context("create temporary trace file")?;

    export(file.path()).with_context(|| format!("export trace to {}", file.path().display()))?;
    tracing::debug!(path = %file.path().display(), "trace exported");

    let destination = uploader
        .upload_and_report(out, file.path(), user, false)
        .context("write upload report")?;
    Ok(destination)
}
