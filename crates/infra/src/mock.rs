//! # テスト用モック
//!
//! ユースケース・ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! juriscoec-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use juriscoec_domain::{
    client::{ClientRecord, NewClient},
    notification::{EmailMessage, NotificationError},
};

use crate::{error::InfraError, notification::NotificationSender, repository::ClientRepository};

// ===== MockClientRepository =====

/// インメモリの ClientRepository
///
/// PostgreSQL の UNIQUE 制約と同じ名前（`clients_email_key` / `clients_phone_key`）で
/// 一意制約違反を返す。
#[derive(Clone, Default)]
pub struct MockClientRepository {
    clients:     Arc<Mutex<Vec<ClientRecord>>>,
    fail_with:   Arc<Mutex<Option<String>>>,
    fixed_clock: Option<DateTime<Utc>>,
}

impl MockClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// `created_at` を固定値にする
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.fixed_clock = Some(at);
        self
    }

    /// 次の insert だけを予期しないエラーで失敗させる
    pub fn fail_next_with(&self, msg: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(msg.into());
    }

    /// 保存済みのクライアント一覧
    pub fn clients(&self) -> Vec<ClientRecord> {
        self.clients.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn insert(&self, client: &NewClient) -> Result<ClientRecord, InfraError> {
        if let Some(msg) = self.fail_with.lock().unwrap().take() {
            return Err(InfraError::unexpected(msg));
        }

        let mut clients = self.clients.lock().unwrap();
        if clients.iter().any(|c| c.email == client.email()) {
            return Err(InfraError::unique_violation(Some("clients_email_key")));
        }
        if clients.iter().any(|c| c.phone == client.phone()) {
            return Err(InfraError::unique_violation(Some("clients_phone_key")));
        }

        let record = ClientRecord::from_new(
            client.clone(),
            self.fixed_clock.unwrap_or_else(Utc::now),
        );
        clients.push(record.clone());
        Ok(record)
    }
}

// ===== MockNotificationSender =====

/// 送信したメールを記録する NotificationSender
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    failing: bool,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に送信失敗を返すモックを作成する
    pub fn failing() -> Self {
        Self {
            sent:    Arc::default(),
            failing: true,
        }
    }

    /// 送信されたメール一覧
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.failing {
            return Err(NotificationError::SendFailed(
                "モック: 送信に失敗しました".to_string(),
            ));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
