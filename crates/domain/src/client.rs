//! # クライアント（Client）
//!
//! 問い合わせをきっかけに登録される見込み顧客のレコードを定義する。
//!
//! ## 設計方針
//!
//! - **正規化してから保存**: 氏名・電話は前後の空白を除去し、メールアドレスは小文字化する
//! - **一意性は DB で保証**: メールアドレス・電話番号の重複は UNIQUE 制約で検出する
//! - **作成のみ**: このシステムはクライアントの更新・削除を行わない

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::contact::{is_valid_email, is_valid_phone};

/// クライアント ID
///
/// clients テーブルの主キー。時刻順に並ぶよう UUID v7 をアプリ側で採番する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

/// クライアント登録時の検証エラー
///
/// `Display` は API レスポンスの `error` にそのまま使われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientValidationError {
    #[error("Name must be a valid text and cannot be empty")]
    InvalidName,

    #[error("Email must have a valid format")]
    InvalidEmail,

    #[error("Phone must have a valid format")]
    InvalidPhone,
}

/// 登録前のクライアント（検証・正規化済み）
///
/// [`NewClient::new`] を通してのみ生成でき、保存可能な値であることを型で保証する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    id:    ClientId,
    name:  String,
    email: String,
    phone: String,
}

impl NewClient {
    /// 入力値を検証し、正規化したクライアントを作成する
    ///
    /// 検証順: 氏名 → メールアドレス → 電話番号
    pub fn new(name: &str, email: &str, phone: &str) -> Result<Self, ClientValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientValidationError::InvalidName);
        }

        if !is_valid_email(email) {
            return Err(ClientValidationError::InvalidEmail);
        }

        if !is_valid_phone(phone) {
            return Err(ClientValidationError::InvalidPhone);
        }

        Ok(Self {
            id:    ClientId::new(),
            name:  name.to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
        })
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// 保存済みのクライアントレコード
///
/// `INSERT ... RETURNING` の結果から復元される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id:         ClientId,
    pub name:       String,
    pub email:      String,
    pub phone:      String,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    /// 保存直前の [`NewClient`] と DB が採番した作成日時からレコードを組み立てる
    pub fn from_new(client: NewClient, created_at: DateTime<Utc>) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            phone: client.phone,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_メールアドレスは小文字化され氏名と電話の前後の空白が除去される() {
        let client = NewClient::new("  Ana  ", "ANA@X.COM", " 0991234567 ").unwrap();

        assert_eq!(client.name(), "Ana");
        assert_eq!(client.email(), "ana@x.com");
        assert_eq!(client.phone(), "0991234567");
    }

    #[test]
    fn test_前後に空白を含むメールアドレスは形式エラーになる() {
        let result = NewClient::new("Ana", " ana@x.com", "0991234567");

        assert_eq!(result, Err(ClientValidationError::InvalidEmail));
    }

    #[test]
    fn test_空白のみの氏名はエラーになる() {
        let result = NewClient::new("   ", "ana@x.com", "0991234567");

        assert_eq!(result, Err(ClientValidationError::InvalidName));
    }

    #[test]
    fn test_不正なメールアドレスはエラーになる() {
        let result = NewClient::new("Ana", "ana@x", "0991234567");

        assert_eq!(result, Err(ClientValidationError::InvalidEmail));
    }

    #[test]
    fn test_不正な電話番号はエラーになる() {
        let result = NewClient::new("Ana", "ana@x.com", "123");

        assert_eq!(result, Err(ClientValidationError::InvalidPhone));
    }

    #[test]
    fn test_氏名とメールの両方が不正な場合は氏名エラーを優先する() {
        let result = NewClient::new("", "invalid", "123");

        assert_eq!(result, Err(ClientValidationError::InvalidName));
    }

    #[test]
    fn test_client_idはuuid_v7で採番される() {
        let id = ClientId::new();

        assert_eq!(id.as_uuid().get_version(), Some(uuid::Version::SortRand));
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }

    #[test]
    fn test_from_newでidと正規化済みの値が引き継がれる() {
        let client = NewClient::new("Ana", "ANA@X.COM", "0991234567").unwrap();
        let id = client.id().clone();
        let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let record = ClientRecord::from_new(client, created_at);

        assert_eq!(record.id, id);
        assert_eq!(record.email, "ana@x.com");
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn test_client_recordのjson形状() {
        let record = ClientRecord {
            id:         ClientId::from_uuid("00000000-0000-0000-0000-000000000001".parse().unwrap()),
            name:       "Ana".to_string(),
            email:      "ana@x.com".to_string(),
            phone:      "0991234567".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["created_at"], "2023-11-14T22:13:20Z");
    }
}
