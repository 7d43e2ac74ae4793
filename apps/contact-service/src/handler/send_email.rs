//! # 問い合わせメール送信ハンドラ
//!
//! `POST /api/send-email`
//!
//! | 結果 | ステータス | ボディ |
//! |---|---|---|
//! | 送信成功 | 200 | `{success: true, message: "Mensaje enviado correctamente"}` |
//! | Content-Type が JSON でない、または JSON を解釈できない | 400 | `{success: false, message: "Solicitud inválida"}` |
//! | 検証エラー（`null` の項目は未入力扱い） | 400 | `{success: false, message: <検証メッセージ>}` |
//! | 送信失敗 | 500 | `{success: false, message: "Error interno del servidor"}` |

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use juriscoec_domain::{
    DomainError,
    contact::{ContactSubmission, validate_contact_form},
};
use juriscoec_shared::EmailDeliveryResponse;

use crate::{error::SendEmailError, usecase::NotificationService};

/// 問い合わせメール API の共有状態
pub struct ContactState {
    pub notification: NotificationService,
}

/// POST /api/send-email
#[tracing::instrument(skip_all)]
pub async fn send_email(
    State(state): State<Arc<ContactState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, SendEmailError> {
    let Json(submission) = payload.map_err(|e| SendEmailError::BadRequest(e.body_text()))?;

    validate_contact_form(&submission).map_err(DomainError::from)?;

    state.notification.send_contact_message(&submission).await?;

    Ok((StatusCode::OK, Json(EmailDeliveryResponse::sent())))
}
