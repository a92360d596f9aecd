//! Health service
//!
//! Dependency checks behind the readiness probe.

use tracing::warn;

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Round-trip to the store and report readiness
    pub async fn readiness(&self) -> ReadinessResponse {
        let store_healthy = match self.ctx.favorite_repo().health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        };

        ReadinessResponse::ready(store_healthy)
    }
}
