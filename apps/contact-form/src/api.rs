//! # contact-service クライアント
//!
//! 問い合わせフォームが呼び出す 2 つのエンドポイントを [`ContactApi`] トレイトで抽象化する。
//! テストではスタブに差し替え、本番では [`HttpContactApi`]（reqwest）を使う。

use async_trait::async_trait;
use juriscoec_domain::{client::ClientRecord, contact::ContactSubmission};
use juriscoec_shared::{ApiResponse, ClientErrorResponse, EmailDeliveryResponse};
use serde::Serialize;

use crate::error::ContactApiError;

/// クライアント登録リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRegistration {
    pub name:  String,
    pub email: String,
    pub phone: String,
}

impl From<&ContactSubmission> for ClientRegistration {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            name:  submission.name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
        }
    }
}

/// contact-service API
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// `POST /api/send-email`
    ///
    /// 2xx かつ `success: true` の場合のみ `Ok` を返す。
    async fn send_email(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailDeliveryResponse, ContactApiError>;

    /// `POST /api/clients`
    ///
    /// 409 は [`ContactApiError::Duplicate`] として返す。
    async fn register_client(
        &self,
        registration: &ClientRegistration,
    ) -> Result<ClientRecord, ContactApiError>;
}

/// reqwest による ContactApi 実装
#[derive(Clone)]
pub struct HttpContactApi {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpContactApi {
    /// 新しいクライアントを作成する
    ///
    /// - `base_url`: contact-service のベース URL（例: `http://localhost:13010`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn send_email(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailDeliveryResponse, ContactApiError> {
        let url = format!("{}/api/send-email", self.base_url);
        let response = self.client.post(&url).json(submission).send().await?;

        let status = response.status();
        let text = response.text().await?;
        let body: EmailDeliveryResponse = serde_json::from_str(&text).map_err(|_| {
            ContactApiError::Unexpected(format!("予期しないステータス {status}: {text}"))
        })?;

        if status.is_success() && body.success {
            Ok(body)
        } else {
            Err(ContactApiError::Rejected {
                status:  status.as_u16(),
                message: body.message,
            })
        }
    }

    async fn register_client(
        &self,
        registration: &ClientRegistration,
    ) -> Result<ClientRecord, ContactApiError> {
        let url = format!("{}/api/clients", self.base_url);
        let response = self.client.post(&url).json(registration).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json::<ApiResponse<ClientRecord>>()
                .await
                .map_err(|e| ContactApiError::Unexpected(e.to_string()))?;
            return Ok(body.into_data());
        }

        let text = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ClientErrorResponse>(&text)
            .map_err(|_| {
                ContactApiError::Unexpected(format!("予期しないステータス {status}: {text}"))
            })?
            .error;

        if status == reqwest::StatusCode::CONFLICT {
            Err(ContactApiError::Duplicate(error))
        } else {
            Err(ContactApiError::Rejected {
                status:  status.as_u16(),
                message: error,
            })
        }
    }
}
