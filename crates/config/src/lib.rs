//! OpAMP extension configuration: schema, startup validation, and loading.
//!
//! Config files: `opamp.toml`, `opamp.yaml`, or `opamp.json`,
//! searched in `./` then `~/.config/opamp/`.
//!
//! Supports `${ENV_VAR}` substitution in the raw config text.
//!
//! Validation runs exactly once, before the extension starts: the instance
//! identity is checked first, then the remote-configuration directory, and
//! the first failure wins.

pub mod env_subst;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    error::ConfigError,
    loader::{config_dir, discover_and_load, load_config},
    schema::{DEFAULT_AUTHENTICATOR, OpampConfig, default_http_client_config},
    validate::{validate_instance_uid, validate_remote_configuration_directory},
};
