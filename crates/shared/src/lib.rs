//! # Juriscoec 共有ユーティリティ
//!
//! contact-service（サーバー）と contact-form（クライアント）の双方で使用する
//! レスポンス型と Observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なデータ型・ユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）
//! - tracing 関連は `observability` feature でのみ有効化する

pub mod api_response;
pub mod contact_response;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use contact_response::{ClientErrorResponse, ClientErrorType, EmailDeliveryResponse};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
