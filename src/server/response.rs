//! HTTP response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::local_timestamp;
use crate::solver::{SolverResponse, SolverStrategy};

/// Envelope wrapped around every solve endpoint's answer.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope {
    pub success: bool,
    pub solver: SolverStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SolverResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiEnvelope {
    pub fn solved(data: SolverResponse) -> Self {
        Self {
            success: true,
            solver: data.solver,
            data: Some(data),
            error: None,
            timestamp: local_timestamp(),
        }
    }

    pub fn failed(solver: SolverStrategy, error: impl Into<String>) -> Self {
        Self {
            success: false,
            solver,
            data: None,
            error: Some(error.into()),
            timestamp: local_timestamp(),
        }
    }
}

/// An envelope paired with its status code.
#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub envelope: ApiEnvelope,
}

impl ApiReply {
    pub fn ok(data: SolverResponse) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: ApiEnvelope::solved(data),
        }
    }

    pub fn bad_request(solver: SolverStrategy, error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            envelope: ApiEnvelope::failed(solver, error),
        }
    }

    pub fn not_implemented(solver: SolverStrategy, error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_IMPLEMENTED,
            envelope: ApiEnvelope::failed(solver, error),
        }
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
