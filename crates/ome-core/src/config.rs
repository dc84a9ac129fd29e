// ── Runtime connection configuration ──
//
// These types describe *how* to reach an appliance. They carry credential
// data and connection tuning, but never touch disk. The CLI constructs a
// `ServerConfig` and hands it in.

use std::time::Duration;

use ome_api::{Credentials, TlsMode, TransportConfig};
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs). Default for appliances.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single appliance.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Appliance URL (e.g., `https://ome.example.com`).
    pub url: Url,
    /// Session credentials.
    pub credentials: Credentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl ServerConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
