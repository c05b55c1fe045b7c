//! Configuration schema for the OpAMP extension.

use {
    opamp_transport::{AuthConfig, HttpClientConfig},
    serde::{Deserialize, Serialize},
};

/// Name of the authenticator component bound by the default transport
/// settings. The transport layer resolves it when the client is built.
pub const DEFAULT_AUTHENTICATOR: &str = "sumologic";

/// OpAMP extension configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpampConfig {
    /// HTTP client settings for the control-plane connection. Flattened so
    /// the transport keys sit at the top level of the config source.
    #[serde(flatten)]
    pub http_client: HttpClientConfig,

    /// Instance identity: a ULID formatted as a 26-character string in
    /// canonical representation. Auto-generated on start when empty.
    pub instance_uid: String,

    /// Where received OpAMP remote configuration is persisted.
    pub remote_configuration_directory: String,

    /// Whether the agent accepts remote configuration from the control plane.
    pub accepts_remote_configuration: bool,
}

impl Default for OpampConfig {
    fn default() -> Self {
        Self {
            http_client: default_http_client_config(),
            instance_uid: String::new(),
            remote_configuration_directory: String::new(),
            accepts_remote_configuration: false,
        }
    }
}

/// Default HTTP client settings: everything stock except the authentication
/// binding, which points at the well-known authenticator.
#[must_use]
pub fn default_http_client_config() -> HttpClientConfig {
    HttpClientConfig {
        auth: Some(AuthConfig::named(DEFAULT_AUTHENTICATOR)),
        ..HttpClientConfig::default()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_bind_the_well_known_authenticator() {
        let client = default_http_client_config();
        assert_eq!(
            client.auth.as_ref().map(|a| a.authenticator.as_str()),
            Some("sumologic")
        );
    }

    #[test]
    fn default_settings_are_deterministic() {
        assert_eq!(default_http_client_config(), default_http_client_config());
    }

    #[test]
    fn default_config_carries_default_transport_settings() {
        let cfg = OpampConfig::default();
        assert_eq!(cfg.http_client, default_http_client_config());
        assert!(cfg.instance_uid.is_empty());
        assert!(cfg.remote_configuration_directory.is_empty());
        assert!(!cfg.accepts_remote_configuration);
    }

    #[test]
    fn transport_keys_are_flattened_to_the_top_level() {
        let toml_str = r#"
endpoint = "https://opamp.example.com/v1/opamp"
instance_uid = "01BX5ZZKBKACTAV9WEVGEMMVRZ"
remote_configuration_directory = "/var/lib/opamp"
accepts_remote_configuration = true

[auth]
authenticator = "basicauth"
"#;
        let cfg: OpampConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.http_client.endpoint, "https://opamp.example.com/v1/opamp");
        assert_eq!(cfg.instance_uid, "01BX5ZZKBKACTAV9WEVGEMMVRZ");
        assert_eq!(cfg.remote_configuration_directory, "/var/lib/opamp");
        assert!(cfg.accepts_remote_configuration);
        assert_eq!(
            cfg.http_client.auth.map(|a| a.authenticator),
            Some("basicauth".to_string())
        );
    }
}
