//! Input validation applied before any network call.
//!
//! Failures are reported with a generic message; field-level detail never
//! reaches the RPC layer or the client.

use axon_connect::domain::{BuildingsQuery, UserCredentials, UserRegistration, VerificationInfo};

/// Generic rejection message for auth actions.
pub const INVALID_INPUT: &str = "Invalid input.";
/// Generic rejection message for economy queries.
pub const INVALID_QUERY: &str = "Invalid input provided.";

const MIN_USER_NAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 6;
const VERIFICATION_CODE_LENGTH: usize = 10;
const MAX_QUERY_LIMIT: i64 = 100;

fn user_name_ok(user_name: &str) -> bool {
    user_name.chars().count() >= MIN_USER_NAME_LENGTH
}

fn password_ok(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn email_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

pub fn credentials(credentials: &UserCredentials) -> bool {
    user_name_ok(&credentials.user_name) && password_ok(&credentials.user_password)
}

pub fn registration(data: &UserRegistration) -> bool {
    user_name_ok(&data.user_name)
        && password_ok(&data.user_password)
        && email_ok(&data.email)
        && !data.corporation_name.is_empty()
}

pub fn verification(info: &VerificationInfo) -> bool {
    user_name_ok(&info.user_name) && info.code.chars().count() == VERIFICATION_CODE_LENGTH
}

pub fn buildings_query(query: &BuildingsQuery) -> bool {
    query
        .limit
        .map_or(true, |limit| limit > 0 && limit <= MAX_QUERY_LIMIT)
}
