use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Put command invoked for uploads.
pub const DEFAULT_PUT_COMMAND: &str = "manifold";
/// Remote folder that uploaded traces land in.
pub const DEFAULT_FOLDER: &str = "perfetto_internal_traces/tree/shared_trace";
/// Retention for uploaded traces: 28 days.
pub const DEFAULT_TTL_SECS: u64 = 28 * 24 * 60 * 60;
/// Root of the hosted Perfetto UI.
pub const DEFAULT_VIEWER_ROOT_URL: &str =
    "https://interncache-all.fbcdn.net/manifold/perfetto-artifacts/tree/ui/index.html";
/// Public prefix under which uploaded objects are served.
pub const DEFAULT_OBJECT_BASE_URL: &str = "https://interncache-all.fbcdn.net/manifold/";

/// Global configuration loaded from `~/.config/traceup/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceupConfig {
    /// Program run as `<put_command> put <local> <destination> ...`.
    pub put_command: String,
    /// Remote folder prefix for destination paths.
    pub folder: String,
    /// Value passed to `--ttl`.
    pub ttl_secs: u64,
    /// Value passed to `--userData`.
    pub user_data: bool,
    /// Perfetto UI page the viewer link points at.
    pub viewer_root_url: String,
    /// Prefix that turns a destination path into a fetchable object URL.
    pub object_base_url: String,
    /// Extra arguments appended when an upload is asked to overwrite.
    #[serde(default)]
    pub overwrite_args: Vec<String>,
}

impl Default for TraceupConfig {
    fn default() -> Self {
        Self {
            put_command: DEFAULT_PUT_COMMAND.to_string(),
            folder: DEFAULT_FOLDER.to_string(),
            ttl_secs: DEFAULT_TTL_SECS,
            user_data: false,
            viewer_root_url: DEFAULT_VIEWER_ROOT_URL.to_string(),
            object_base_url: DEFAULT_OBJECT_BASE_URL.to_string(),
            overwrite_args: Vec::new(),
        }
    }
}

impl TraceupConfig {
    /// Reject settings that would produce a broken command line or link.
    pub fn validate(&self) -> Result<()> {
        if self.put_command.trim().is_empty() {
            bail!("put_command must not be empty");
        }
        if self.folder.trim_matches('/').is_empty() {
            bail!("folder must not be empty");
        }
        if self.ttl_secs == 0 {
            bail!("ttl_secs must be greater than zero");
        }
        url::Url::parse(&self.viewer_root_url)
            .with_context(|| format!("invalid viewer_root_url {:?}", self.viewer_root_url))?;
        url::Url::parse(&self.object_base_url)
            .with_context(|| format!("invalid object_base_url {:?}", self.object_base_url))?;
        Ok(())
    }
}

/// Location of `config.toml` under the XDG config home. Does not touch the filesystem.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("traceup")
        .context("locate XDG base directories")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Uploads need no config, so a config home that cannot be located or written
/// (read-only `$HOME`) only costs the default file: built-in defaults are used.
pub fn load_or_init() -> Result<TraceupConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("no config home, using defaults: {:#}", err);
            Ok(TraceupConfig::default())
        }
    }
}

/// [`load_or_init`] for an explicit default location. An existing file that
/// is unreadable or invalid is still an error.
pub fn load_or_init_at(path: &Path) -> Result<TraceupConfig> {
    if path.exists() {
        return load_from(path);
    }

    let default_cfg = TraceupConfig::default();
    match write_default(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(err) => tracing::warn!("using built-in defaults: {:#}", err),
    }
    Ok(default_cfg)
}

fn write_default(path: &Path, cfg: &TraceupConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize default config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write default config {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit file. Missing files are an error here.
pub fn load_from(path: &Path) -> Result<TraceupConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TraceupConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate config {}", path.display()))?;
    Ok(cfg)
}
