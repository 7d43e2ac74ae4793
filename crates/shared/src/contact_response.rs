//! # 問い合わせ API のレスポンス型
//!
//! 2 つのエンドポイントはレスポンス形式が異なる:
//!
//! | エンドポイント | 成功 | 失敗 |
//! |---|---|---|
//! | `POST /api/send-email` | `{success: true, message}` | `{success: false, message}` |
//! | `POST /api/clients` | `{data: ClientRecord}` | `{error, type?}` |
//!
//! いずれもサーバーとクライアント（contact-form）で共有する。

use serde::{Deserialize, Serialize};

/// メール送信結果（`POST /api/send-email` のレスポンス）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDeliveryResponse {
    pub success: bool,
    pub message: String,
}

impl EmailDeliveryResponse {
    /// 送信成功
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Mensaje enviado correctamente".to_string(),
        }
    }

    /// 失敗（メッセージは利用者向けの文言）
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// 内部エラー
    ///
    /// message は固定値（送信プロバイダの詳細を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::failed("Error interno del servidor")
    }
}

/// クライアント登録エラーの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientErrorType {
    /// メールアドレスまたは電話番号の重複（409）
    DuplicateValue,
    /// サーバー内部エラー（500）
    ServerError,
}

/// クライアント登録のエラーレスポンス（`POST /api/clients`）
///
/// 400 の場合 `type` は出力しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientErrorResponse {
    pub error:      String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ClientErrorType>,
}

impl ClientErrorResponse {
    /// 400 Bad Request
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            error:      error.into(),
            error_type: None,
        }
    }

    /// 409 Conflict（重複）
    pub fn duplicate(error: impl Into<String>) -> Self {
        Self {
            error:      error.into(),
            error_type: Some(ClientErrorType::DuplicateValue),
        }
    }

    /// 500 Internal Server Error
    ///
    /// error は固定値（内部情報を漏らさないため）。
    pub fn server_error() -> Self {
        Self {
            error:      "Internal server error".to_string(),
            error_type: Some(ClientErrorType::ServerError),
        }
    }
}
