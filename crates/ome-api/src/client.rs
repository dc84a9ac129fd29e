// Appliance HTTP client
//
// Wraps `reqwest::Client` with URL construction, session-token injection,
// and error-envelope parsing. Endpoint groups (sessions, templates) are
// implemented as inherent methods in separate files to keep this module
// focused on transport mechanics.

use std::sync::RwLock;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::{AUTH_TOKEN_HEADER, Session};
use crate::error::Error;
use crate::models::ErrorEnvelope;
use crate::transport::TransportConfig;

/// Raw HTTP client for the appliance REST API.
///
/// Every request made after [`login`](Self::login) carries the session
/// token. Methods return deserialized bodies; error envelopes are turned
/// into [`Error::Api`] before the caller sees them.
pub struct OmeClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
    /// Set by `login`, cleared by `logout`.
    session: RwLock<Option<Session>>,
}

impl OmeClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the appliance root, e.g. `https://ome.example.com`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout_secs(),
            session: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: 0,
            session: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The appliance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session token is currently held.
    pub fn has_session(&self) -> bool {
        self.session.read().expect("session lock poisoned").is_some()
    }

    // ── Session state ────────────────────────────────────────────────

    pub(crate) fn set_session(&self, session: Session) {
        debug!(session_id = %session.id, "storing session token");
        *self.session.write().expect("session lock poisoned") = Some(session);
    }

    pub(crate) fn take_session(&self) -> Option<Session> {
        self.session.write().expect("session lock poisoned").take()
    }

    /// Apply the session token to a request builder.
    fn apply_token(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.session.read().expect("session lock poisoned");
        match guard.as_ref() {
            Some(session) => builder.header(AUTH_TOKEN_HEADER, session.token.expose_secret()),
            None => builder,
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{path}");
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and deserialize the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.send(self.http.get(url)).await?;
        Self::parse_json(resp).await
    }

    /// Send a POST request with a JSON body, discarding the response body.
    pub(crate) async fn post_unit(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        debug!("POST {}", url);
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    /// Send a PUT request with a JSON body, discarding the response body.
    pub(crate) async fn put_unit(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        debug!("PUT {}", url);
        self.send(self.http.put(url).json(body)).await?;
        Ok(())
    }

    /// Attach the token, send, and turn non-2xx statuses into errors.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        let resp = self
            .apply_token(builder)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = resp.status();
        trace!(%status, "response received");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(parse_error_body(status.as_u16(), &body));
        }

        Ok(resp)
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() && self.timeout_secs > 0 {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

/// Build an [`Error::Api`] from a non-2xx body, preferring the first
/// extended-info message over the generic top-level one.
pub(crate) fn parse_error_body(status: u16, body: &str) -> Error {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error);

    match parsed {
        Some(err) => {
            let first = err.extended_info.into_iter().next();
            let code = first.as_ref().and_then(|info| info.message_id.clone());
            let message = first
                .and_then(|info| info.message)
                .or(err.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            Error::Api {
                status,
                message,
                code,
            }
        }
        None => Error::Api {
            status,
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.chars().take(200).collect()
            },
            code: None,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_extended_info() {
        let body = r#"{"error":{"code":"Base.1.0.GeneralError","message":"A general error has occurred.",
            "@Message.ExtendedInfo":[{"MessageId":"CTEM1004","Message":"Unable to find the template."}]}}"#;
        match parse_error_body(400, body) {
            Error::Api {
                status,
                message,
                code,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unable to find the template.");
                assert_eq!(code.as_deref(), Some("CTEM1004"));
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn error_body_falls_back_to_raw_text() {
        let err = parse_error_body(502, "Bad Gateway");
        assert!(matches!(
            err,
            Error::Api { status: 502, ref message, code: None } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn error_body_empty() {
        let err = parse_error_body(500, "");
        assert_eq!(err.to_string(), "API error (HTTP 500): HTTP 500");
    }

    #[test]
    fn api_url_joins_without_double_slash() {
        let client = OmeClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://ome.example.com/").unwrap(),
        );
        let url = client.api_url("TemplateService/Templates(10)/AttributeDetails").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ome.example.com/api/TemplateService/Templates(10)/AttributeDetails"
        );
    }
}
