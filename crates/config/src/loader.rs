use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    env_subst::substitute_env,
    schema::{OpampConfig, default_http_client_config},
};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["opamp.toml", "opamp.yaml", "opamp.yml", "opamp.json"];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<OpampConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./opamp.{toml,yaml,yml,json}` (working directory)
/// 2. `~/.config/opamp/opamp.{toml,yaml,yml,json}` (user-global)
///
/// Returns `OpampConfig::default()` if no config file is found. Loading never
/// validates; run [`OpampConfig::validate`] on the result before starting the
/// extension.
pub fn discover_and_load() -> OpampConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    OpampConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "opamp") {
        let config_dir = dirs.config_dir();
        for name in CONFIG_FILENAMES {
            let p = config_dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/opamp/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "opamp").map(|d| d.config_dir().to_path_buf())
}

/// Parse `raw` in the format implied by the file extension, then fill in the
/// default authentication binding when the source did not supply one. A
/// source that names its own authenticator keeps it.
fn parse_config(raw: &str, path: &Path) -> anyhow::Result<OpampConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    let mut cfg: OpampConfig = match ext {
        "toml" => toml::from_str(raw)?,
        "yaml" | "yml" => serde_yaml::from_str(raw)?,
        "json" => serde_json::from_str(raw)?,
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    };

    if cfg.http_client.auth.is_none() {
        cfg.http_client.auth = default_http_client_config().auth;
    }
    Ok(cfg)
}
