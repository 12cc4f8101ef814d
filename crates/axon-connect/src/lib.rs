//! Axon Connect: client-side gRPC connectivity for the game gateway
//!
//! This crate is the boundary between the gateway and the backend RPC
//! services. It owns the pieces every outgoing call shares:
//!
//! - **CallContext**: per-call data (caller IP, bearer token) attached to a
//!   request before dispatch
//! - **ContextInterceptor**: stamps service and caller metadata onto every
//!   outgoing call
//! - **AuthError**: the closed set of domain errors transport failures are
//!   translated into
//! - **ClientRegistry**: one lazily-connected client per backend service,
//!   constructed once and injected into consumers
//! - **Repositories**: typed access to the auth and economy services
//!
//! # Example
//!
//! ```rust,no_run
//! use axon_connect::repository::GrpcAuthRepository;
//! use axon_connect::domain::{AuthRepository, UserCredentials};
//! use axon_connect::{ClientRegistry, ConnectConfig};
//! use std::sync::Arc;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = ConnectConfig::from_env()?;
//!     let registry = Arc::new(ClientRegistry::new(&config)?);
//!     let auth = GrpcAuthRepository::new(registry);
//!
//!     let credentials = UserCredentials {
//!         user_name: "nomad".to_string(),
//!         user_password: "hunter22".to_string(),
//!     };
//!     let session = auth.login(credentials, "203.0.113.7").await?;
//!     println!("jwt: {}", session.jwt);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod interceptor;
pub mod registry;
pub mod repository;

pub use config::ConnectConfig;
pub use context::CallContext;
pub use error::{AuthError, ConnectError};
pub use interceptor::ContextInterceptor;
pub use registry::ClientRegistry;
