//! Application state shared across all handlers.

use crate::session::SessionKeys;
use axon_connect::domain::{AuthRepository, EconomyRepository};
use std::sync::Arc;

/// Dependencies injected into the router at startup.
///
/// Repositories are trait objects so tests can swap in stubs without a
/// backend; production wiring lives in `main`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthRepository>,
    pub economy: Arc<dyn EconomyRepository>,
    pub sessions: SessionKeys,
}
