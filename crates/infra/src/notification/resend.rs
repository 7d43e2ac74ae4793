//! Resend 通知送信実装
//!
//! Resend のトランザクションメール API（`POST /emails`）に HTTPS で送信する。
//! 本番環境で使用する。
//!
//! 2xx 以外のレスポンスと通信エラーはすべて [`NotificationError::SendFailed`]
//! として返す。リトライは行わない。

use std::time::Duration;

use async_trait::async_trait;
use juriscoec_domain::notification::{EmailMessage, NotificationError};
use serde::Serialize;

use super::NotificationSender;

/// Resend API のデフォルトエンドポイント
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend 送信設定
///
/// API キーを含むため `Debug` は実装しない。
#[derive(Clone)]
pub struct ResendConfig {
    /// エンドポイント URL（テストではモックサーバーの URL を渡す）
    pub api_url:      String,
    /// API キー（`Authorization: Bearer` に使用）
    pub api_key:      String,
    /// 送信元（例: `Formulario Web <no-reply@juriscoec.com>`）
    pub from_address: String,
    /// リクエスト全体のタイムアウト
    pub timeout:      Duration,
}

/// `POST /emails` のリクエストボディ
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:     &'a str,
    to:       [&'a str; 1],
    subject:  &'a str,
    html:     &'a str,
    text:     &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Resend 通知送信
#[derive(Clone)]
pub struct ResendNotificationSender {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendNotificationSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// タイムアウト付きの `reqwest::Client` を 1 つ生成し、以降の送信で使い回す。
    pub fn new(config: ResendConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl NotificationSender for ResendNotificationSender {
    #[tracing::instrument(skip_all, level = "debug", fields(to = %email.to))]
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let body = SendEmailRequest {
            from:     &self.config.from_address,
            to:       [email.to.as_str()],
            subject:  &email.subject,
            html:     &email.html_body,
            text:     &email.text_body,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend への接続失敗: {e}")))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "Resend: メール送信に成功");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::SendFailed(format!(
            "Resend がステータス {status} を返しました: {body}"
        )))
    }
}
