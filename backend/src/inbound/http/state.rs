//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports, so
//! tests can swap in doubles without any I/O.

use std::sync::Arc;

use crate::domain::ports::{IdentityRegistry, JobCatalog};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub identity: Arc<dyn IdentityRegistry>,
    pub jobs: Arc<dyn JobCatalog>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(identity: Arc<dyn IdentityRegistry>, jobs: Arc<dyn JobCatalog>) -> Self {
        Self { identity, jobs }
    }
}
