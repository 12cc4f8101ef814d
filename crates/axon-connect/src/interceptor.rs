//! Metadata interceptor applied to every outgoing RPC.

use crate::context::CallContext;
use crate::error::ConnectError;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};
use tracing::warn;

/// Metadata key carrying the static service credential.
pub const PROXY_API_KEY: &str = "proxy-api-key";
/// Metadata key carrying the caller's IP address.
pub const PROXY_IP_ADDRESS: &str = "proxy-ip-address";
/// Metadata key carrying the caller's bearer token.
pub const AUTHORIZATION: &str = "authorization";

/// Stamps service and caller metadata onto every outgoing call.
///
/// The static API key is always set. The caller IP and bearer token are
/// taken from the [`CallContext`] in the request extensions when present
/// and omitted otherwise; the context itself is never modified. The hook
/// performs no I/O and never fails a call.
#[derive(Clone)]
pub struct ContextInterceptor {
    api_key: MetadataValue<Ascii>,
}

impl ContextInterceptor {
    /// Builds the interceptor from the configured service credential.
    pub fn new(proxy_api_key: &str) -> Result<Self, ConnectError> {
        let api_key = proxy_api_key.parse()?;
        Ok(Self { api_key })
    }
}

impl Interceptor for ContextInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let context = request.extensions().get::<CallContext>().cloned();

        let metadata = request.metadata_mut();
        metadata.insert(PROXY_API_KEY, self.api_key.clone());

        if let Some(context) = context {
            if let Some(ip_address) = context.ip_address {
                match ip_address.parse() {
                    Ok(value) => {
                        metadata.insert(PROXY_IP_ADDRESS, value);
                    }
                    Err(e) => warn!("Skipping unencodable caller IP: {}", e),
                }
            }

            if let Some(jwt) = context.jwt {
                match format!("Bearer {jwt}").parse() {
                    Ok(value) => {
                        metadata.insert(AUTHORIZATION, value);
                    }
                    Err(e) => warn!("Skipping unencodable bearer token: {}", e),
                }
            }
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::request_with_context;

    fn header<'a>(request: &'a Request<()>, key: &str) -> Option<&'a str> {
        request.metadata().get(key).map(|v| v.to_str().unwrap())
    }

    #[test]
    fn test_api_key_is_set_without_context() {
        let mut interceptor = ContextInterceptor::new("secret-key").unwrap();

        let request = interceptor.call(Request::new(())).unwrap();

        assert_eq!(header(&request, PROXY_API_KEY), Some("secret-key"));
        assert_eq!(header(&request, PROXY_IP_ADDRESS), None);
        assert_eq!(header(&request, AUTHORIZATION), None);
    }

    #[test]
    fn test_ip_is_forwarded_when_present() {
        let mut interceptor = ContextInterceptor::new("secret-key").unwrap();
        let request = request_with_context((), CallContext::for_ip("198.51.100.4"));

        let request = interceptor.call(request).unwrap();

        assert_eq!(header(&request, PROXY_API_KEY), Some("secret-key"));
        assert_eq!(header(&request, PROXY_IP_ADDRESS), Some("198.51.100.4"));
        assert_eq!(header(&request, AUTHORIZATION), None);
    }

    #[test]
    fn test_bearer_token_is_formatted() {
        let mut interceptor = ContextInterceptor::new("secret-key").unwrap();
        let request =
            request_with_context((), CallContext::for_session("198.51.100.4", "jwt-abc"));

        let request = interceptor.call(request).unwrap();

        assert_eq!(header(&request, AUTHORIZATION), Some("Bearer jwt-abc"));
        assert_eq!(header(&request, PROXY_IP_ADDRESS), Some("198.51.100.4"));
    }

    #[test]
    fn test_caller_context_is_left_intact() {
        let mut interceptor = ContextInterceptor::new("secret-key").unwrap();
        let request =
            request_with_context((), CallContext::for_session("198.51.100.4", "jwt-abc"));

        let request = interceptor.call(request).unwrap();

        let context = request.extensions().get::<CallContext>().unwrap();
        assert_eq!(context.ip_address.as_deref(), Some("198.51.100.4"));
        assert_eq!(context.jwt.as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn test_invalid_api_key_is_rejected_up_front() {
        assert!(ContextInterceptor::new("line\nbreak").is_err());
    }
}
