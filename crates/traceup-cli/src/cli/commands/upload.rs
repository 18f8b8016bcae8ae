//! `traceup <local_path>` – upload a trace and print its viewer link.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use traceup_core::config::TraceupConfig;
use traceup_core::uploader::Uploader;

/// How a run ended, before it is mapped to a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploaded,
    UploadFailed,
    InputMissing,
}

impl UploadStatus {
    /// A failed upload exits 0 unless `fail_on_upload_error` is set; a missing input always exits 1.
    pub fn exit_code(self, fail_on_upload_error: bool) -> u8 {
        match self {
            UploadStatus::Uploaded => 0,
            UploadStatus::UploadFailed if fail_on_upload_error => 1,
            UploadStatus::UploadFailed => 0,
            UploadStatus::InputMissing => 1,
        }
    }
}

/// Checks the input exists, loads config, resolves the user, uploads, and
/// writes status lines to `out`.
///
/// `load_config` and `user` are only consulted once the input file is known to
/// exist, so a missing trace always gets its own message.
pub fn run_upload<W, C, U>(
    out: &mut W,
    load_config: C,
    local_path: &Path,
    user: U,
    overwrite: bool,
) -> Result<UploadStatus>
where
    W: Write,
    C: FnOnce() -> Result<TraceupConfig>,
    U: FnOnce() -> Result<String>,
{
    if !local_path.exists() {
        writeln!(
            out,
            "[ERROR] The trace file doesn't exist: {}",
            local_path.display()
        )?;
        tracing::error!(path = %local_path.display(), "trace file not found");
        return Ok(UploadStatus::InputMissing);
    }

    let cfg = load_config()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let user = user().context("determine user for destination path")?;
    let uploader = Uploader::new(cfg);
    let destination = uploader.upload_and_report(out, local_path, &user, overwrite)?;

    Ok(match destination {
        Some(_) => UploadStatus::Uploaded,
        None => UploadStatus::UploadFailed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use traceup_core::uploader::UPLOAD_FAILED_MESSAGE;

    fn cfg_with(put_command: &str) -> impl FnOnce() -> Result<TraceupConfig> {
        let mut cfg = TraceupConfig::default();
        cfg.put_command = put_command.to_string();
        move || Ok(cfg)
    }

    #[test]
    fn missing_input_reports_and_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let mut out = Vec::new();

        let status = run_upload(
            &mut out,
            || panic!("config must not be loaded for a missing file"),
            &missing,
            || panic!("user must not be resolved for a missing file"),
            false,
        )
        .unwrap();

        assert_eq!(status, UploadStatus::InputMissing);
        assert_eq!(status.exit_code(false), 1);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            format!("[ERROR] The trace file doesn't exist: {}\n", missing.display())
        );
    }

    #[cfg(unix)]
    #[test]
    fn successful_upload_prints_link() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let name = f.path().file_name().unwrap().to_str().unwrap().to_string();
        let mut out = Vec::new();

        let status = run_upload(
            &mut out,
            cfg_with("true"),
            f.path(),
            || Ok("dave".to_string()),
            false,
        )
        .unwrap();

        assert_eq!(status, UploadStatus::Uploaded);
        assert_eq!(status.exit_code(true), 0);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("The trace is accessible at: https://interncache-all.fbcdn.net/"));
        assert!(out.contains(&format!(
            "perfetto_internal_traces/tree/shared_trace/dave_{name}"
        )));
    }

    #[cfg(unix)]
    #[test]
    fn failed_upload_keeps_zero_exit_by_default() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let mut out = Vec::new();

        let status = run_upload(
            &mut out,
            cfg_with("false"),
            f.path(),
            || Ok("dave".to_string()),
            false,
        )
        .unwrap();

        assert_eq!(status, UploadStatus::UploadFailed);
        assert_eq!(status.exit_code(false), 0);
        assert_eq!(status.exit_code(true), 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(UPLOAD_FAILED_MESSAGE));
        assert!(!out.contains("accessible at"));
    }

    #[test]
    fn missing_input_wins_over_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let mut out = Vec::new();

        let status = run_upload(
            &mut out,
            || anyhow::bail!("parse config: TOML parse error"),
            &missing,
            || Ok("dave".to_string()),
            false,
        )
        .unwrap();

        assert_eq!(status, UploadStatus::InputMissing);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("[ERROR] The trace file doesn't exist: "));
    }

    #[test]
    fn broken_config_is_an_error_for_existing_input() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let mut out = Vec::new();
        let err = run_upload(
            &mut out,
            || anyhow::bail!("parse config: TOML parse error"),
            f.path(),
            || Ok("dave".to_string()),
            false,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("TOML parse error"));
        assert!(out.is_empty());
    }

    #[test]
    fn unresolvable_user_is_an_error() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let mut out = Vec::new();
        let err = run_upload(
            &mut out,
            cfg_with("true"),
            f.path(),
            || anyhow::bail!("no user"),
            false,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("no user"));
    }
}
