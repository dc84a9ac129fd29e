// Session authentication
//
// Token-based API sessions. Login exchanges credentials for an
// `X-Auth-Token` that the client attaches to every later request;
// logout deletes the session resource on the appliance.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::auth::{AUTH_TOKEN_HEADER, Credentials, Session};
use crate::client::OmeClient;
use crate::error::Error;
use crate::models::{SessionRequest, SessionResponse};

impl OmeClient {
    /// Open an API session.
    ///
    /// `POST /api/SessionService/Sessions`
    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        let url = self.api_url("SessionService/Sessions")?;
        debug!(username = %credentials.username, "logging in at {}", url);

        let body = SessionRequest {
            user_name: &credentials.username,
            password: credentials.password.expose_secret(),
            session_type: "API",
        };

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let token = resp
            .headers()
            .get(AUTH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .ok_or_else(|| Error::Authentication {
                message: format!("login response carried no {AUTH_TOKEN_HEADER} header"),
            })?;

        let body = resp.text().await.map_err(Error::Transport)?;
        let session: SessionResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("session response: {e}"),
                body,
            })?;

        self.set_session(Session {
            id: session.id,
            token: SecretString::from(token),
        });
        debug!("login successful");
        Ok(())
    }

    /// Close the current session. A no-op when none is held.
    ///
    /// `DELETE /api/SessionService/Sessions('{id}')`
    pub async fn logout(&self) -> Result<(), Error> {
        let Some(session) = self.take_session() else {
            return Ok(());
        };
        let url = self.api_url(&format!("SessionService/Sessions('{}')", session.id))?;
        debug!("logging out at {}", url);

        // The token was already taken out of the client; send it explicitly.
        let resp = self
            .http()
            .delete(url)
            .header(AUTH_TOKEN_HEADER, session.token.expose_secret())
            .send()
            .await
            .map_err(Error::Transport)?;

        if !resp.status().is_success() {
            debug!(status = %resp.status(), "logout rejected; session will expire on its own");
        }
        Ok(())
    }
}
