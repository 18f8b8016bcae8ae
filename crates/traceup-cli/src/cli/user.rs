//! Resolution of the user name that prefixes destination paths.

use anyhow::{anyhow, bail, Result};

const USER_ENV_VARS: [&str; 2] = ["USER", "LOGNAME"];

/// `--user` wins, then `$USER`, then `$LOGNAME`.
pub fn resolve_user(explicit: Option<&str>) -> Result<String> {
    resolve_user_with(explicit, |key| std::env::var(key).ok())
}

fn resolve_user_with<F>(explicit: Option<&str>, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(user) = explicit {
        let user = user.trim();
        if user.is_empty() || user.contains('/') {
            bail!("invalid --user {user:?}");
        }
        return Ok(user.to_string());
    }

    USER_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| anyhow!("cannot determine user name; set $USER or pass --user"))
}
