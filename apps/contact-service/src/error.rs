//! # Contact Service エラー定義
//!
//! エンドポイントごとのエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 2 つのエンドポイントはレスポンス形式が異なるため、エラー型も分ける:
//!
//! - [`SendEmailError`] → `{success: false, message}`
//! - [`ClientError`] → `{error, type?}`
//!
//! 5xx の原因はログにのみ出力し、レスポンスには固定メッセージを返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use juriscoec_domain::{DomainError, notification::NotificationError};
use juriscoec_infra::InfraError;
use juriscoec_shared::{ClientErrorResponse, EmailDeliveryResponse};
use thiserror::Error;

/// 不正な JSON ボディに対する利用者向けメッセージ（send-email）
pub const INVALID_REQUEST_MESSAGE: &str = "Solicitud inválida";

/// `POST /api/send-email` で発生するエラー
#[derive(Debug, Error)]
pub enum SendEmailError {
    /// 入力値の検証エラー
    #[error("入力エラー: {0}")]
    Validation(#[from] DomainError),

    /// リクエストボディを解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// メールの生成・送信に失敗
    #[error("メール送信エラー: {0}")]
    Delivery(#[from] NotificationError),
}

impl IntoResponse for SendEmailError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            SendEmailError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                EmailDeliveryResponse::failed(e.to_string()),
            ),
            SendEmailError::BadRequest(detail) => {
                tracing::debug!(detail = %detail, "send-email: リクエストボディを解釈できません");
                (
                    StatusCode::BAD_REQUEST,
                    EmailDeliveryResponse::failed(INVALID_REQUEST_MESSAGE),
                )
            }
            SendEmailError::Delivery(e) => {
                tracing::error!(error = %e, "問い合わせメールの送信に失敗");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EmailDeliveryResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// `POST /api/clients` で発生するエラー
#[derive(Debug, Error)]
pub enum ClientError {
    /// 不正なリクエスト（Content-Type、JSON、必須項目、形式）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// メールアドレスまたは電話番号の重複
    #[error("重複: {0}")]
    Duplicate(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ClientError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ClientErrorResponse::bad_request(msg))
            }
            ClientError::Duplicate(msg) => (StatusCode::CONFLICT, ClientErrorResponse::duplicate(msg)),
            ClientError::Database(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "クライアント登録に失敗");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ClientErrorResponse::server_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use juriscoec_domain::contact::ContactValidationError;

    use super::*;

    #[test]
    fn test_検証エラーは400になる() {
        let err = SendEmailError::from(DomainError::from(ContactValidationError::InvalidPhone));

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_送信失敗は500になる() {
        let err = SendEmailError::from(NotificationError::SendFailed("timeout".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_重複は409になる() {
        let err = ClientError::Duplicate("dup".to_string());

        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_データベースエラーは500になる() {
        let err = ClientError::from(InfraError::unexpected("connection reset"));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
