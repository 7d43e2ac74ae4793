//! # ClientRepository
//!
//! 問い合わせ経由のクライアント登録を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **作成のみ**: 更新・削除は行わない
//! - **重複は DB が判定**: 事前の SELECT は行わず、UNIQUE 制約違反を
//!   [`InfraErrorKind::UniqueViolation`](crate::InfraErrorKind::UniqueViolation) として返す

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use juriscoec_domain::client::{ClientRecord, NewClient};
use sqlx::PgPool;

use crate::error::InfraError;

/// クライアントリポジトリトレイト
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// クライアントを登録し、保存されたレコードを返す
    ///
    /// email または phone が既存レコードと重複する場合は
    /// 違反した制約名付きの一意制約違反エラーを返す。
    async fn insert(&self, client: &NewClient) -> Result<ClientRecord, InfraError>;
}

/// PostgreSQL 実装の ClientRepository
#[derive(Debug, Clone)]
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(client_id = %client.id()))]
    async fn insert(&self, client: &NewClient) -> Result<ClientRecord, InfraError> {
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO clients (id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING created_at
            "#,
        )
        .bind(client.id().as_uuid())
        .bind(client.name())
        .bind(client.email())
        .bind(client.phone())
        .fetch_one(&self.pool)
        .await?;

        Ok(ClientRecord::from_new(client.clone(), created_at))
    }
}
