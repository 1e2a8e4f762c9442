//! Liveness and readiness endpoints.
//!
//! Readiness needs two things: the schema migrated (and samples seeded when
//! enabled) and the listener bound. Either one missing keeps the endpoint at
//! 503 so orchestrators hold traffic back while storage is prepared.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Startup and shutdown flags shared with the health handlers.
pub struct HealthState {
    storage_ready: AtomicBool,
    listening: AtomicBool,
    draining: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            storage_ready: AtomicBool::new(false),
            listening: AtomicBool::new(false),
            draining: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that migrations and seeding finished.
    pub fn mark_storage_ready(&self) {
        self.storage_ready.store(true, Ordering::Release);
    }

    /// Record that the HTTP listener is bound.
    pub fn mark_listening(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Fail both checks from now on, e.g. after a shutdown signal.
    pub fn mark_draining(&self) {
        self.draining.store(true, Ordering::Release);
    }

    /// Storage prepared, listener bound and not draining.
    pub fn is_ready(&self) -> bool {
        self.is_alive()
            && self.storage_ready.load(Ordering::Acquire)
            && self.listening.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        !self.draining.load(Ordering::Acquire)
    }

    fn readiness(&self) -> HealthStatus {
        if !self.is_alive() {
            HealthStatus::Draining
        } else if !self.storage_ready.load(Ordering::Acquire) {
            HealthStatus::PreparingStorage
        } else if !self.listening.load(Ordering::Acquire) {
            HealthStatus::Starting
        } else {
            HealthStatus::Ready
        }
    }
}

/// Health outcome reported in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ready,
    Alive,
    PreparingStorage,
    Starting,
    Draining,
}

/// JSON body of both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    pub status: HealthStatus,
}

fn health_response(ok: bool, status: HealthStatus) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthBody { status })
}

/// Readiness check: 200 once storage is prepared and the listener is bound.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = HealthBody),
        (status = 503, description = "Storage not prepared, listener not bound, or draining", body = HealthBody)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready(), state.readiness())
}

/// Liveness check: 200 until the server starts draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = HealthBody),
        (status = 503, description = "Server is shutting down", body = HealthBody)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let alive = state.is_alive();
    let status = if alive {
        HealthStatus::Alive
    } else {
        HealthStatus::Draining
    };
    health_response(alive, status)
}
