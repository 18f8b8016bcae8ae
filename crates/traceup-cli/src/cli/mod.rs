//! CLI for traceup.

mod commands;
mod user;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use traceup_core::config::{self, TraceupConfig};

use commands::run_upload;

/// Upload a trace file to blob storage and print a Perfetto link for it.
#[derive(Debug, Parser)]
#[command(name = "traceup")]
#[command(about = "Upload a trace file and print a Perfetto viewer link", long_about = None)]
pub struct Cli {
    /// The local path for the trace file to upload.
    pub local_path: PathBuf,

    /// User name used in the destination path (default: $USER, then $LOGNAME).
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Ask the put command to replace an existing object (uses `overwrite_args` from config).
    #[arg(long)]
    pub overwrite: bool,

    /// Retention for the uploaded trace in seconds (default from config: 28 days).
    #[arg(long, value_name = "SECS")]
    pub ttl_secs: Option<u64>,

    /// Put command to run instead of the configured one.
    #[arg(long = "command", value_name = "PROGRAM")]
    pub put_command: Option<String>,

    /// Read configuration from this file instead of ~/.config/traceup/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the upload itself fails (default: report and exit 0).
    #[arg(long)]
    pub fail_on_upload_error: bool,
}

impl Cli {
    /// `--config` must be readable and valid; the default location falls back to built-in defaults.
    fn load_config(&self) -> Result<TraceupConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        self.effective_config(cfg)
    }

    /// Config with command-line overrides applied.
    fn effective_config(&self, mut cfg: TraceupConfig) -> Result<TraceupConfig> {
        if let Some(ttl_secs) = self.ttl_secs {
            cfg.ttl_secs = ttl_secs;
        }
        if let Some(put_command) = &self.put_command {
            cfg.put_command = put_command.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn run_from_args() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    let status = run_upload(
        &mut stdout,
        || cli.load_config(),
        &cli.local_path,
        || user::resolve_user(cli.user.as_deref()),
        cli.overwrite,
    )?;
    Ok(ExitCode::from(status.exit_code(cli.fail_on_upload_error)))
}

#[cfg(test)]
mod tests;
