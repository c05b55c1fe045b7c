//! Startup validation for the extension configuration.
//!
//! Runs once, synchronously, before the extension is allowed to start. The
//! checks never mutate the configuration; a fresh `instance_uid` for a config
//! that passed validation with an empty one is allocated by the extension
//! afterwards.

use ulid::Ulid;

use crate::{
    error::{ConfigError, Result},
    schema::OpampConfig,
};

/// Checks that `uid`, when present, is a ULID in canonical 26-character
/// representation. An empty value is valid.
pub fn validate_instance_uid(uid: &str) -> Result<()> {
    if uid.is_empty() {
        return Ok(());
    }
    // Canonical form only: 26 Crockford base-32 characters with the 48-bit
    // timestamp in range. A first character above '7' overflows the
    // timestamp, which the base-32 decoder alone does not reject.
    let overflows = !matches!(uid.as_bytes()[0], b'0'..=b'7');
    if overflows || Ulid::from_string(uid).is_err() {
        return Err(ConfigError::InvalidInstanceUid);
    }
    Ok(())
}

/// Probes `path` with a filesystem status query.
///
/// The probe only asserts the path can be stat'd right now. A plain file
/// passes, and nothing guarantees the path stays accessible afterwards.
pub fn validate_remote_configuration_directory(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConfigError::MissingRemoteConfigurationDirectory);
    }
    if let Err(source) = std::fs::metadata(path) {
        return Err(ConfigError::InaccessibleDirectory {
            path: path.to_string(),
            source,
        });
    }
    Ok(())
}

impl OpampConfig {
    /// Runs the startup checks in a fixed order and returns the first
    /// failure: instance identity, then the remote-configuration directory.
    /// The directory is never inspected when the identity check fails.
    pub fn validate(&self) -> Result<()> {
        validate_instance_uid(&self.instance_uid)?;
        validate_remote_configuration_directory(&self.remote_configuration_directory)?;
        Ok(())
    }
}
