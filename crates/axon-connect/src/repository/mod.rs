//! gRPC-backed implementations of the domain repositories.

mod auth;
mod economy;

pub use auth::GrpcAuthRepository;
pub use economy::GrpcEconomyRepository;
