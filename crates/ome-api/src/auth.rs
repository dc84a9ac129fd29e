use secrecy::SecretString;

/// Credentials for opening an API session against the appliance.
///
/// The appliance exchanges these for an `X-Auth-Token` via
/// `POST /api/SessionService/Sessions`; the password never travels again
/// after that.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// An open API session: the session resource id (needed for logout)
/// and the token sent on every subsequent request.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) id: String,
    pub(crate) token: SecretString,
}

/// Header carrying the session token on every authenticated request.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
