//! Invocation of the external put-object command.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::UploadError;
use crate::config::TraceupConfig;

/// Captured result of one put command run.
#[derive(Debug)]
pub struct PutOutcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl PutOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Argument list for `put`:
/// `put <local> <destination> --ttl <secs> --userData <bool> [overwrite_args..]`.
pub fn put_args(
    cfg: &TraceupConfig,
    local_path: &Path,
    destination: &str,
    overwrite: bool,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "put".into(),
        local_path.as_os_str().to_owned(),
        destination.into(),
        "--ttl".into(),
        cfg.ttl_secs.to_string().into(),
        "--userData".into(),
        cfg.user_data.to_string().into(),
    ];
    if overwrite {
        args.extend(cfg.overwrite_args.iter().map(OsString::from));
    }
    args
}

/// Run `program` with `args`, blocking until it exits. Stdout and stderr are
/// captured; stdin is closed so an interactive prompt cannot hang the upload.
pub fn run_put(program: &str, args: &[OsString]) -> Result<PutOutcome, UploadError> {
    tracing::debug!(program, ?args, "running put command");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| UploadError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(PutOutcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
