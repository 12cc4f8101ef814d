//! Auth repository backed by the `interface.v1` service.

use crate::context::{request_with_context, CallContext};
use crate::domain::{
    AuthRepository, RegisteredUser, SessionToken, User, UserCredentials, UserRegistration,
    VerificationInfo,
};
use crate::error::AuthError;
use crate::registry::ClientRegistry;
use async_trait::async_trait;
use axon_proto::interface::v1::{
    GetCurrentUserRequest, LoginRequest, RegisterRequest, ResendVerificationEmailRequest,
    UserRole, VerifyUserRequest,
};
use std::sync::Arc;
use tracing::debug;

/// Talks to the backend auth service with the shared client registry.
pub struct GrpcAuthRepository {
    registry: Arc<ClientRegistry>,
}

impl GrpcAuthRepository {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }
}

fn role_name(role: i32) -> String {
    match UserRole::try_from(role) {
        Ok(UserRole::Admin) => "admin",
        Ok(UserRole::Player) => "player",
        _ => "unknown",
    }
    .to_string()
}

#[async_trait]
impl AuthRepository for GrpcAuthRepository {
    async fn register(
        &self,
        data: UserRegistration,
        ip_address: &str,
    ) -> Result<RegisteredUser, AuthError> {
        debug!("Registering user {}", data.user_name);

        let request = RegisterRequest {
            user_name: data.user_name,
            user_password: data.user_password,
            email: data.email,
            corporation_name: data.corporation_name,
        };

        let response = self
            .registry
            .auth()
            .register(request_with_context(request, CallContext::for_ip(ip_address)))
            .await?;

        Ok(RegisteredUser {
            user_uuid: response.into_inner().user_uuid,
        })
    }

    async fn verify_user(
        &self,
        info: VerificationInfo,
        ip_address: &str,
    ) -> Result<RegisteredUser, AuthError> {
        debug!("Verifying user {}", info.user_name);

        let request = VerifyUserRequest {
            user_name: info.user_name,
            code: info.code,
        };

        let response = self
            .registry
            .auth()
            .verify_user(request_with_context(request, CallContext::for_ip(ip_address)))
            .await?;

        Ok(RegisteredUser {
            user_uuid: response.into_inner().user_uuid,
        })
    }

    async fn resend_verification_email(
        &self,
        user_name: &str,
        ip_address: &str,
    ) -> Result<(), AuthError> {
        let request = ResendVerificationEmailRequest {
            user_name: user_name.to_string(),
        };

        self.registry
            .auth()
            .resend_verification_email(request_with_context(
                request,
                CallContext::for_ip(ip_address),
            ))
            .await?;

        Ok(())
    }

    async fn login(
        &self,
        credentials: UserCredentials,
        ip_address: &str,
    ) -> Result<SessionToken, AuthError> {
        debug!("Logging in user {}", credentials.user_name);

        let request = LoginRequest {
            user_name: credentials.user_name,
            user_password: credentials.user_password,
        };

        let response = self
            .registry
            .auth()
            .login(request_with_context(request, CallContext::for_ip(ip_address)))
            .await?;

        Ok(SessionToken {
            jwt: response.into_inner().jwt,
        })
    }

    async fn get_current_user(&self, ip_address: &str, jwt: &str) -> Result<User, AuthError> {
        let response = self
            .registry
            .auth()
            .get_current_user(request_with_context(
                GetCurrentUserRequest {},
                CallContext::for_session(ip_address, jwt),
            ))
            .await?;

        let user = response.into_inner();

        Ok(User {
            uuid: user.user_uuid,
            name: user.user_name,
            email: user.email,
            role: role_name(user.user_role),
        })
    }
}
