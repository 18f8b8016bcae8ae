//! Perfetto viewer links for uploaded traces.

use crate::config::TraceupConfig;

/// Builds `<viewer_root>#!/?url=<object_base><destination>`.
///
/// Pure string concatenation: no escaping is applied, the destination is
/// expected to be a plain object key.
pub fn build_viewer_url(viewer_root: &str, object_base: &str, destination: &str) -> String {
    format!("{viewer_root}#!/?url={object_base}{destination}")
}

/// Viewer link for `destination` using the configured roots.
pub fn viewer_url_for(cfg: &TraceupConfig, destination: &str) -> String {
    build_viewer_url(&cfg.viewer_root_url, &cfg.object_base_url, destination)
}
