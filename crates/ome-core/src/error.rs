// ── Core error types ──
//
// User-facing errors from ome-core. Consumers never see HTTP status codes
// or JSON parse failures directly: the `From<ome_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.
// The tree-lookup variants are terminal; they describe a mismatch between
// the caller's request and the tree that was just fetched.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to appliance at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Appliance request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Attribute tree lookups ───────────────────────────────────────
    /// The first path segment matched no top-level group.
    #[error("Attribute group not found: '{group}'")]
    AttributeGroupNotFound { group: String },

    /// A group was found, but the next path segment matched none of its children.
    #[error("Sub attribute group '{group}' not found under '{parent}'")]
    SubAttributeGroupNotFound { group: String, parent: String },

    /// The group chain resolved, but no attribute matched both name and id.
    #[error("Attribute '{name}' (id {attribute_id}) not found in group '{group}'")]
    AttributeNotFound {
        name: String,
        attribute_id: i64,
        group: String,
    },

    /// The (NIC, port) pair does not exist in the network view.
    #[error("Invalid network details: no port {port} on '{nic_identifier}'")]
    InvalidNetworkDetails { nic_identifier: String, port: i64 },

    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// The appliance message id (e.g. "CTEM1004").
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` for the tree-lookup failures and API 404s.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AttributeGroupNotFound { .. }
                | Self::SubAttributeGroupNotFound { .. }
                | Self::AttributeNotFound { .. }
                | Self::InvalidNetworkDetails { .. }
                | Self::NotFound { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<ome_api::Error> for CoreError {
    fn from(err: ome_api::Error) -> Self {
        match err {
            ome_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            ome_api::Error::SessionExpired => CoreError::AuthenticationFailed {
                message: "Session expired -- re-authentication required".into(),
            },
            ome_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            ome_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ome_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            ome_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            ome_api::Error::Api {
                status: 404,
                message,
                code: _,
            } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: message,
            },
            ome_api::Error::Api {
                status,
                message,
                code,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            ome_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
