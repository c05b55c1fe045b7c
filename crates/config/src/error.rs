use thiserror::Error;

/// Validation failures for the OpAMP extension configuration.
///
/// Every variant is fatal at startup: a failing check must keep the extension
/// from starting, and the error is handed back unchanged to the startup
/// sequencer. The `Display` strings are read by operators and scraped from
/// logs, so the wording is load-bearing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `instance_uid` is non-empty but not a ULID in canonical form.
    #[error("opamp instance_uid is invalid")]
    InvalidInstanceUid,

    /// `remote_configuration_directory` was not provided.
    #[error("opamp remote_configuration_directory must be provided")]
    MissingRemoteConfigurationDirectory,

    /// `remote_configuration_directory` could not be stat'd.
    #[error("opamp remote_configuration_directory {path} must be readable: {source}")]
    InaccessibleDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
