//! Shared fixtures for handler tests: stub repositories and a small
//! request driver over the router.

use crate::session::{Claims, SessionKeys};
use crate::state::AppState;
use async_trait::async_trait;
use axon_connect::domain::{
    AuthRepository, BuildingsPage, BuildingsQuery, BusinessesPage, BusinessesQuery, Corporation,
    EconomyRepository, RegisteredUser, SessionToken, User, UserCredentials, UserRegistration,
    VerificationInfo,
};
use axon_connect::AuthError;
use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

fn not_stubbed<T>() -> Result<T, AuthError> {
    Err(AuthError::Unknown("not stubbed".to_string()))
}

/// Auth repository whose answers are fixed per test.
pub struct StubAuth {
    pub register: Result<RegisteredUser, AuthError>,
    pub verify: Result<RegisteredUser, AuthError>,
    pub resend: Result<(), AuthError>,
    pub login: Result<SessionToken, AuthError>,
    pub current_user: Result<User, AuthError>,
}

impl Default for StubAuth {
    fn default() -> Self {
        Self {
            register: not_stubbed(),
            verify: not_stubbed(),
            resend: not_stubbed(),
            login: not_stubbed(),
            current_user: not_stubbed(),
        }
    }
}

#[async_trait]
impl AuthRepository for StubAuth {
    async fn register(
        &self,
        _data: UserRegistration,
        _ip_address: &str,
    ) -> Result<RegisteredUser, AuthError> {
        self.register.clone()
    }

    async fn verify_user(
        &self,
        _info: VerificationInfo,
        _ip_address: &str,
    ) -> Result<RegisteredUser, AuthError> {
        self.verify.clone()
    }

    async fn resend_verification_email(
        &self,
        _user_name: &str,
        _ip_address: &str,
    ) -> Result<(), AuthError> {
        self.resend.clone()
    }

    async fn login(
        &self,
        _credentials: UserCredentials,
        _ip_address: &str,
    ) -> Result<SessionToken, AuthError> {
        self.login.clone()
    }

    async fn get_current_user(&self, _ip_address: &str, _jwt: &str) -> Result<User, AuthError> {
        self.current_user.clone()
    }
}

/// Economy repository whose answers are fixed per test.
pub struct StubEconomy {
    pub corporation: Result<Corporation, AuthError>,
    pub buildings: Result<BuildingsPage, AuthError>,
    pub businesses: Result<BusinessesPage, AuthError>,
}

impl Default for StubEconomy {
    fn default() -> Self {
        Self {
            corporation: not_stubbed(),
            buildings: not_stubbed(),
            businesses: not_stubbed(),
        }
    }
}

#[async_trait]
impl EconomyRepository for StubEconomy {
    async fn get_corporation(
        &self,
        _ip_address: &str,
        _jwt: &str,
    ) -> Result<Corporation, AuthError> {
        self.corporation.clone()
    }

    async fn query_buildings(
        &self,
        _filters: BuildingsQuery,
        _ip_address: &str,
        _jwt: &str,
    ) -> Result<BuildingsPage, AuthError> {
        self.buildings.clone()
    }

    async fn query_businesses(
        &self,
        _filters: BusinessesQuery,
        _ip_address: &str,
        _jwt: &str,
    ) -> Result<BusinessesPage, AuthError> {
        self.businesses.clone()
    }
}

/// Application state over stub repositories.
pub fn state_with(auth: StubAuth, economy: StubEconomy, secret: &str) -> AppState {
    AppState {
        auth: Arc::new(auth),
        economy: Arc::new(economy),
        sessions: SessionKeys::new(secret, false),
    }
}

/// Issues a session token the way the backend does.
pub fn issue_token(secret: &str, exp_offset: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: "user-uuid-123".to_string(),
        exp: (now + exp_offset) as usize,
        user_name: "nomad".to_string(),
        user_email: "nomad@example.com".to_string(),
        user_role: "player".to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Drives one request through the router and decodes the JSON reply.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, json)
}
