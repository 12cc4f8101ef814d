//! Error types for the axon-connect crate.

use thiserror::Error;
use tonic::{Code, Status};

/// Failures constructing or configuring the gRPC connectivity layer.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Invalid metadata value: {0}")]
    InvalidMetadata(#[from] tonic::metadata::errors::InvalidMetadataValue),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// The closed set of domain errors surfaced to action handlers.
///
/// Messages are fixed and user-presentable; handlers match on the variant
/// to pick flow-specific wording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("The verification code has expired.")]
    VerificationCodeExpired,

    #[error("The provided verification is false.")]
    VerificationCodeFalse,

    #[error("The username or password provided is incorrect.")]
    InvalidCredentials,

    #[error("User account is inactive and requires verification.")]
    UserInactive,

    #[error("User is not authenticated.")]
    Unauthenticated,

    #[error("An unexpected authentication error occurred: {0}")]
    Unknown(String),
}

// The backend repurposes two transport codes as verification outcomes
// (DEADLINE_EXCEEDED = expired code, INVALID_ARGUMENT = wrong code).
// Keep this table in lockstep with the server and do not extend it.
impl From<Status> for AuthError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::DeadlineExceeded => AuthError::VerificationCodeExpired,
            Code::InvalidArgument => AuthError::VerificationCodeFalse,
            _ => AuthError::Unknown(status.message().to_string()),
        }
    }
}
