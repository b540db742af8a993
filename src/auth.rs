//! Credential-encoding strategies.
//!
//! A closed set of schemes for turning connection credentials into
//! request authentication. Each scheme does exactly one thing to the
//! outgoing request; with no credentials on the connection, every
//! scheme is a no-op.

use crate::connection::Credentials;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// How connection credentials are applied to a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// No authentication, even when credentials are present
    None,
    /// HTTP basic auth from login and password
    #[default]
    Basic,
    /// `Authorization: Bearer` from the password (or the login when no
    /// password is set)
    Bearer,
}

impl AuthScheme {
    /// Applies this scheme to a request builder.
    #[must_use]
    pub fn apply(self, builder: RequestBuilder, credentials: Option<&Credentials>) -> RequestBuilder {
        let Some(credentials) = credentials else {
            return builder;
        };

        match self {
            AuthScheme::None => builder,
            AuthScheme::Basic => {
                builder.basic_auth(&credentials.login, credentials.password.as_ref())
            }
            AuthScheme::Bearer => builder.bearer_auth(credentials.token()),
        }
    }

    /// Returns the scheme's configuration-file name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::None => "none",
            AuthScheme::Basic => "basic",
            AuthScheme::Bearer => "bearer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(scheme: AuthScheme, credentials: Option<&Credentials>) -> reqwest::Request {
        let client = reqwest::Client::new();
        scheme
            .apply(client.get("http://localhost/probe"), credentials)
            .build()
            .unwrap()
    }

    #[test]
    fn default_scheme_is_basic() {
        assert_eq!(AuthScheme::default(), AuthScheme::Basic);
    }

    #[test]
    fn basic_sets_authorization_header() {
        let credentials = Credentials::new("alice", "s3cret");
        let request = build(AuthScheme::Basic, Some(&credentials));

        let header = request.headers().get("authorization").unwrap();
        assert!(header.to_str().unwrap().starts_with("Basic "));
    }

    #[test]
    fn bearer_uses_password_as_token() {
        let credentials = Credentials::new("alice", "tok-123");
        let request = build(AuthScheme::Bearer, Some(&credentials));

        let header = request.headers().get("authorization").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn bearer_falls_back_to_login() {
        let credentials = Credentials::login_only("tok-login");
        let request = build(AuthScheme::Bearer, Some(&credentials));

        let header = request.headers().get("authorization").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-login");
    }

    #[test]
    fn none_scheme_sends_nothing() {
        let credentials = Credentials::new("alice", "s3cret");
        let request = build(AuthScheme::None, Some(&credentials));

        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn missing_credentials_skip_auth_for_every_scheme() {
        for scheme in [AuthScheme::None, AuthScheme::Basic, AuthScheme::Bearer] {
            let request = build(scheme, None);
            assert!(request.headers().get("authorization").is_none());
        }
    }

    #[test]
    fn serde_names_are_lowercase() {
        let scheme: AuthScheme = serde_json::from_str("\"bearer\"").unwrap();
        assert_eq!(scheme, AuthScheme::Bearer);
        assert_eq!(serde_json::to_string(&AuthScheme::Basic).unwrap(), "\"basic\"");
    }

    #[test]
    fn unknown_scheme_name_is_rejected() {
        let result: Result<AuthScheme, _> = serde_json::from_str("\"digest\"");
        assert!(result.is_err());
    }
}
