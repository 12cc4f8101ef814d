//! Shared client registry for the backend services.

use crate::config::ConnectConfig;
use crate::error::ConnectError;
use crate::interceptor::ContextInterceptor;
use axon_proto::economy::v1::economy_service_client::EconomyServiceClient;
use axon_proto::interface::v1::auth_service_client::AuthServiceClient;
use std::sync::OnceLock;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::info;

/// A channel with the context interceptor applied.
pub type InterceptedChannel = InterceptedService<Channel, ContextInterceptor>;

pub type AuthClient = AuthServiceClient<InterceptedChannel>;
pub type EconomyClient = EconomyServiceClient<InterceptedChannel>;

/// One client per backend service, sharing a single lazy channel.
///
/// The registry is constructed once at process start and handed to the
/// repositories; there is no module-level singleton. Each accessor builds
/// its client on first use and returns the cached instance afterwards
/// (clients are cheap clones around the shared channel). There is no
/// invalidation or teardown within the process lifetime.
pub struct ClientRegistry {
    channel: Channel,
    interceptor: ContextInterceptor,
    auth: OnceLock<AuthClient>,
    economy: OnceLock<EconomyClient>,
}

impl ClientRegistry {
    /// Builds the registry against the configured backend address.
    ///
    /// The channel connects lazily on first call; TLS with native roots is
    /// applied when the config asks for it. Endpoint or credential errors
    /// surface immediately and are not retried.
    pub fn new(config: &ConnectConfig) -> Result<Self, ConnectError> {
        let mut endpoint = Endpoint::from_shared(config.server_url.clone())?;

        if config.use_tls {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
            info!("gRPC channel configured for production (TLS)");
        } else {
            info!("gRPC channel configured for development (plaintext)");
        }

        let channel = endpoint.connect_lazy();
        let interceptor = ContextInterceptor::new(&config.proxy_api_key)?;

        Ok(Self {
            channel,
            interceptor,
            auth: OnceLock::new(),
            economy: OnceLock::new(),
        })
    }

    /// The auth service client.
    pub fn auth(&self) -> AuthClient {
        self.auth
            .get_or_init(|| {
                AuthServiceClient::with_interceptor(
                    self.channel.clone(),
                    self.interceptor.clone(),
                )
            })
            .clone()
    }

    /// The economy service client.
    pub fn economy(&self) -> EconomyClient {
        self.economy
            .get_or_init(|| {
                EconomyServiceClient::with_interceptor(
                    self.channel.clone(),
                    self.interceptor.clone(),
                )
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_hands_out_clients_without_connecting() {
        let config = ConnectConfig::new("http://localhost:50051", "key");
        let registry = ClientRegistry::new(&config).unwrap();

        // The channel is lazy, so accessors never touch the network. Both
        // calls must come back from the same cached instance.
        let _first = registry.auth();
        let _second = registry.auth();
        let _economy = registry.economy();
    }

    #[test]
    fn test_invalid_server_url_is_rejected() {
        let config = ConnectConfig::new("not a uri", "key");
        assert!(matches!(
            ClientRegistry::new(&config),
            Err(ConnectError::Transport(_))
        ));
    }
}
