//! Trace uploader.
//!
//! Computes the remote destination for a local trace, hands the file to the
//! external put command, and turns a successful upload into a viewer link.
//! Authentication and transport are the put command's business; a non-zero
//! exit is reported once and never retried.

mod error;
mod put;

pub use error::UploadError;
pub use put::{put_args, run_put, PutOutcome};

use std::io::{self, Write};
use std::path::Path;

use crate::config::TraceupConfig;
use crate::destination::{destination_path, trace_basename};
use crate::viewer::viewer_url_for;

/// Printed after the put command exits successfully.
pub const UPLOAD_OK_MESSAGE: &str = "Upload trace successfully.";
/// Printed when the put command fails; the usual cause is an existing object.
pub const UPLOAD_FAILED_MESSAGE: &str = "[ERROR] Upload failed, maybe the trace file exists.";

#[derive(Debug, Clone)]
pub struct Uploader {
    cfg: TraceupConfig,
}

impl Uploader {
    pub fn new(cfg: TraceupConfig) -> Self {
        Self { cfg }
    }

    /// Destination key `local_path` would be uploaded to by `user`.
    pub fn destination_for(&self, local_path: &Path, user: &str) -> Result<String, UploadError> {
        let file_name = trace_basename(local_path)
            .ok_or_else(|| UploadError::InvalidInput(local_path.to_path_buf()))?;
        Ok(destination_path(&self.cfg.folder, user, file_name))
    }

    /// Upload `local_path` as `user`, returning the destination key.
    pub fn try_upload(
        &self,
        local_path: &Path,
        user: &str,
        overwrite: bool,
    ) -> Result<String, UploadError> {
        if !local_path.exists() {
            return Err(UploadError::InputNotFound(local_path.to_path_buf()));
        }
        let destination = self.destination_for(local_path, user)?;
        let args = put_args(&self.cfg, local_path, &destination, overwrite);
        let outcome = run_put(&self.cfg.put_command, &args)?;

        if outcome.success() {
            tracing::debug!(
                stdout = %outcome.stdout.trim_end(),
                stderr = %outcome.stderr.trim_end(),
                "put command succeeded"
            );
            Ok(destination)
        } else {
            Err(UploadError::UploadFailed {
                program: self.cfg.put_command.clone(),
                status: outcome.status,
                stderr: outcome.stderr,
            })
        }
    }

    /// Like [`Uploader::try_upload`], but failures are logged and collapse to `None`.
    pub fn upload(&self, local_path: &Path, user: &str, overwrite: bool) -> Option<String> {
        match self.try_upload(local_path, user, overwrite) {
            Ok(destination) => {
                tracing::info!(
                    local = %local_path.display(),
                    %destination,
                    "uploaded trace"
                );
                Some(destination)
            }
            Err(UploadError::UploadFailed {
                program,
                status,
                stderr,
            }) => {
                tracing::warn!(
                    local = %local_path.display(),
                    %program,
                    %status,
                    stderr = %stderr.trim_end(),
                    "trace upload failed"
                );
                None
            }
            Err(err) => {
                tracing::warn!(
                    local = %local_path.display(),
                    "trace upload failed: {:#}",
                    anyhow::Error::from(err)
                );
                None
            }
        }
    }

    pub fn viewer_url(&self, destination: &str) -> String {
        viewer_url_for(&self.cfg, destination)
    }

    /// Upload and write the user-facing status lines to `out`: the success
    /// line plus the viewer link, or the failure line.
    pub fn upload_and_report<W: Write>(
        &self,
        out: &mut W,
        local_path: &Path,
        user: &str,
        overwrite: bool,
    ) -> io::Result<Option<String>> {
        let destination = self.upload(local_path, user, overwrite);
        match &destination {
            Some(destination) => {
                writeln!(out, "{UPLOAD_OK_MESSAGE}")?;
                write_viewer_url(out, &self.viewer_url(destination))?;
            }
            None => writeln!(out, "{UPLOAD_FAILED_MESSAGE}")?,
        }
        Ok(destination)
    }
}

pub fn write_viewer_url<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "The trace is accessible at: {url}")
}
