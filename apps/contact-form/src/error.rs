//! contact-service クライアントのエラー型

use thiserror::Error;

/// contact-service クライアントエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactApiError {
    /// サーバーがリクエストを受け付けなかった（4xx / 5xx、または `success: false`）
    ///
    /// `message` はサーバーが返した利用者向けの文言。
    #[error("リクエストが拒否されました（{status}）: {message}")]
    Rejected { status: u16, message: String },

    /// クライアントが登録済み（409）
    #[error("登録済みのクライアントです: {0}")]
    Duplicate(String),

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// レスポンスを解釈できない
    #[error("予期しないレスポンス: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for ContactApiError {
    fn from(err: reqwest::Error) -> Self {
        ContactApiError::Network(err.to_string())
    }
}
