//! Authentication actions.

use crate::ip::client_ip;
use crate::session::{SessionKeys, AUTH_COOKIE};
use crate::state::AppState;
use crate::validate;
use axon_connect::domain::{User, UserCredentials, UserRegistration, VerificationInfo};
use axon_connect::AuthError;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

/// Generic action outcome.
#[derive(Debug, Serialize)]
pub struct ActionReply {
    pub success: bool,
    pub message: String,
}

impl ActionReply {
    fn ok(message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
        })
    }

    fn failure(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.into(),
        })
    }
}

/// Login outcome; `is_inactive` routes the client to the verification flow.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    pub success: bool,
    pub is_inactive: bool,
    pub message: String,
    pub user: Option<User>,
}

impl LoginReply {
    fn failure(is_inactive: bool, message: &str) -> Json<Self> {
        Json(Self {
            success: false,
            is_inactive,
            message: message.to_string(),
            user: None,
        })
    }
}

/// Logs a user in and plants the session cookie.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(credentials): Json<UserCredentials>,
) -> (CookieJar, Json<LoginReply>) {
    if !validate::credentials(&credentials) {
        return (jar, LoginReply::failure(false, validate::INVALID_INPUT));
    }

    let ip_address = client_ip(&headers);

    match state.auth.login(credentials, &ip_address).await {
        Ok(session) => {
            // The fresh token also carries the user's claims.
            let user = state.sessions.verify(&session.jwt).ok();
            let jar = jar.add(state.sessions.session_cookie(session.jwt));

            (
                jar,
                Json(LoginReply {
                    success: true,
                    is_inactive: false,
                    message: "Login successful!".to_string(),
                    user,
                }),
            )
        }
        Err(AuthError::UserInactive) => (
            jar,
            LoginReply::failure(true, "Login failed. Please verify your account."),
        ),
        Err(error) => {
            tracing::error!("Login failed: {}", error);
            (
                jar,
                LoginReply::failure(false, "Login failed. Please check your credentials."),
            )
        }
    }
}

/// Registers a new account and its corporation.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(data): Json<UserRegistration>,
) -> Json<ActionReply> {
    if !validate::registration(&data) {
        return ActionReply::failure(validate::INVALID_INPUT);
    }

    let ip_address = client_ip(&headers);

    match state.auth.register(data, &ip_address).await {
        Ok(_) => ActionReply::ok(
            "Registration successful! Please check your email for a verification code.",
        ),
        Err(error) => {
            tracing::error!("Registration failed: {}", error);
            ActionReply::failure(error.to_string())
        }
    }
}

/// Confirms the emailed verification code.
pub async fn verify_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(info): Json<VerificationInfo>,
) -> Json<ActionReply> {
    if !validate::verification(&info) {
        return ActionReply::failure(validate::INVALID_INPUT);
    }

    let ip_address = client_ip(&headers);

    match state.auth.verify_user(info, &ip_address).await {
        Ok(_) => ActionReply::ok("Verification successful! You can now log in."),
        Err(AuthError::VerificationCodeExpired) => ActionReply::failure(
            "Your verification code has expired. Please request a new one.",
        ),
        Err(AuthError::VerificationCodeFalse) => ActionReply::failure(
            "The verification code is incorrect. Please check and try again.",
        ),
        Err(error) => {
            tracing::error!("Verification failed: {}", error);
            ActionReply::failure("Verification failed. Please check the code and try again.")
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendPayload {
    pub user_name: String,
}

/// Requests a fresh verification code.
pub async fn resend_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ResendPayload>,
) -> Json<ActionReply> {
    if payload.user_name.is_empty() {
        return ActionReply::failure("Username is required.");
    }

    let ip_address = client_ip(&headers);

    match state
        .auth
        .resend_verification_email(&payload.user_name, &ip_address)
        .await
    {
        Ok(()) => ActionReply::ok("A new verification code has been sent."),
        Err(error) => {
            tracing::error!("Resending verification code failed: {}", error);
            ActionReply::failure("Failed to resend code.")
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeReply {
    pub user: Option<User>,
}

/// Returns the user behind the session cookie, if any.
///
/// A token that fails verification clears the cookie so the client knows
/// to re-authenticate; it is never an error response.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<MeReply>) {
    let Some(cookie) = jar.get(AUTH_COOKIE) else {
        return (jar, Json(MeReply { user: None }));
    };

    match state.sessions.verify(cookie.value()) {
        Ok(user) => (jar, Json(MeReply { user: Some(user) })),
        Err(error) => {
            tracing::debug!("Session token rejected: {}", error);
            let jar = jar.add(SessionKeys::removal_cookie());
            (jar, Json(MeReply { user: None }))
        }
    }
}

/// Clears the session cookie.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.add(SessionKeys::removal_cookie()), StatusCode::OK)
}
