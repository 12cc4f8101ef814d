//! Cookie-based session handling.
//!
//! The backend issues an HS256-signed token on login; the gateway stores it
//! in the `auth_token` cookie and verifies it locally on later requests.
//! A failed verification is "not authenticated", never fatal: the cookie is
//! dropped and the client is expected to log in again.

use axon_connect::domain::User;
use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth_token";

/// Claims carried by the backend-issued session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User UUID.
    pub sub: String,
    /// Expiration timestamp (Unix epoch).
    pub exp: usize,
    pub user_name: String,
    pub user_email: String,
    pub user_role: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

/// Verifies session tokens and builds the matching cookies.
#[derive(Clone)]
pub struct SessionKeys {
    decoding: DecodingKey,
    secure_cookies: bool,
}

impl SessionKeys {
    /// Builds the verifier from the shared secret. `secure_cookies` should
    /// be on whenever the gateway is served over HTTPS.
    pub fn new(secret: &str, secure_cookies: bool) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            secure_cookies,
        }
    }

    /// Verifies a token and decodes the authenticated user from its claims.
    pub fn verify(&self, token: &str) -> Result<User, SessionError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid,
            }
        })?;

        Ok(User {
            uuid: data.claims.sub,
            name: data.claims.user_name,
            email: data.claims.user_email,
            role: data.claims.user_role,
        })
    }

    /// The session cookie set after a successful login.
    pub fn session_cookie(&self, jwt: String) -> Cookie<'static> {
        Cookie::build((AUTH_COOKIE, jwt))
            .path("/")
            .http_only(true)
            .secure(self.secure_cookies)
            .same_site(SameSite::Strict)
            .build()
    }

    /// An expired cookie that clears the session in the browser.
    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build((AUTH_COOKIE, ""))
            .path("/")
            .max_age(time::Duration::seconds(0))
            .build()
    }
}
