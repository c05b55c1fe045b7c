//! HTTP client transport settings for the OpAMP connection.
//!
//! This crate only models the shape of the settings: what can be configured,
//! the defaults, and the (de)serialization. Building an actual client from
//! them (endpoint resolution, TLS setup, resolving the authenticator name to
//! an implementation) is the transport layer's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP client that talks to the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Endpoint URL of the OpAMP control plane.
    pub endpoint: String,
    /// Request timeout in seconds. Defaults to 30.
    pub timeout_secs: u64,
    /// Additional headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Request body compression ("gzip", "zstd"). `None` disables compression.
    pub compression: Option<String>,
    /// TLS settings for the connection.
    pub tls: TlsClientConfig,
    /// Authentication binding. `None` sends unauthenticated requests.
    pub auth: Option<AuthConfig>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: HashMap::new(),
            compression: None,
            tls: TlsClientConfig::default(),
            auth: None,
        }
    }
}

/// Client-side TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsClientConfig {
    /// Disable TLS entirely and connect over plain HTTP.
    pub insecure: bool,
    /// Skip verification of the server certificate chain and host name.
    pub insecure_skip_verify: bool,
    /// Path to a CA certificate bundle (PEM) used to verify the server.
    pub ca_file: Option<String>,
    /// Path to a client certificate (PEM) for mutual TLS.
    pub cert_file: Option<String>,
    /// Path to the client private key (PEM) for mutual TLS.
    pub key_file: Option<String>,
}

/// Reference, by stable name, to a pluggable authenticator component.
///
/// The transport layer resolves the name against its authenticator registry
/// when the client is built; an unknown name fails there, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Name of the authenticator component.
    pub authenticator: String,
}

impl AuthConfig {
    /// Binding to the authenticator with the given name.
    #[must_use]
    pub fn named(authenticator: impl Into<String>) -> Self {
        Self {
            authenticator: authenticator.into(),
        }
    }
}
