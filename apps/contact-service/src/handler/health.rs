//! # ヘルスチェックハンドラ
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health        → {"status": "healthy", "version": "0.1.0"}
//! GET /health/ready  → {"status": "ready", "checks": {"database": "ok"}}
//! ```

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use juriscoec_infra::{InfraError, db};
use juriscoec_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::PgPool;

/// Readiness Check のタイムアウト
const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// DB 疎通確認の抽象
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), InfraError>;
}

#[async_trait]
impl DatabaseProbe for PgPool {
    async fn ping(&self) -> Result<(), InfraError> {
        db::ping(self).await
    }
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub database: Arc<dyn DatabaseProbe>,
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check エンドポイント
///
/// DB に `SELECT 1` を発行する。成功 → 200、失敗・タイムアウト → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database = match tokio::time::timeout(READINESS_TIMEOUT, state.database.ping()).await {
        Ok(result) => {
            if let Err(e) = &result {
                tracing::warn!(error = %e, "readiness check: database ping failed");
            }
            CheckStatus::from(result)
        }
        Err(_) => {
            tracing::warn!("readiness check: database ping timed out");
            CheckStatus::Error
        }
    };

    let response = ReadinessResponse::from_checks([("database", database)]);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
