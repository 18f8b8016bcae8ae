//! Upload error type.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Why an upload produced no destination path.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The local trace file is not there.
    #[error("trace file doesn't exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The local path has no usable file name to build a remote key from.
    #[error("trace path {} has no usable file name", .0.display())]
    InvalidInput(PathBuf),

    /// The put command could not be started at all (not installed, not executable).
    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The put command ran and reported failure.
    #[error("`{program}` failed with {status}")]
    UploadFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}
