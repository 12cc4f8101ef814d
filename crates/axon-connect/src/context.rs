//! Per-call request context attached to outgoing RPCs.

/// Dynamic, per-request data passed to the interceptor through the
/// request extensions. Constructed by the call site, read-only afterwards;
/// every outgoing call carries at most one.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// Caller IP forwarded to the backend for rate limiting.
    pub ip_address: Option<String>,
    /// Bearer token asserting the caller's identity.
    pub jwt: Option<String>,
}

impl CallContext {
    /// Context for unauthenticated calls (registration, login).
    pub fn for_ip(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
            jwt: None,
        }
    }

    /// Context for calls made on behalf of a logged-in user.
    pub fn for_session(ip_address: impl Into<String>, jwt: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
            jwt: Some(jwt.into()),
        }
    }
}

/// Wraps a message into a request carrying the given context.
pub fn request_with_context<T>(message: T, context: CallContext) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request.extensions_mut().insert(context);
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_travels_in_extensions() {
        let request = request_with_context((), CallContext::for_ip("10.0.0.1"));

        let context = request
            .extensions()
            .get::<CallContext>()
            .expect("context missing from extensions");
        assert_eq!(context.ip_address.as_deref(), Some("10.0.0.1"));
        assert!(context.jwt.is_none());
    }

    #[test]
    fn test_session_context_carries_token() {
        let context = CallContext::for_session("10.0.0.1", "token-123");
        assert_eq!(context.jwt.as_deref(), Some("token-123"));
    }
}
