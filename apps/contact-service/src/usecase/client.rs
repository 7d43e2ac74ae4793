//! # クライアント登録ユースケース
//!
//! 検証・正規化済みのクライアントを保存し、一意制約違反を利用者向けの
//! 重複メッセージに変換する。

use std::sync::Arc;

use juriscoec_domain::{
    DomainError,
    client::{ClientRecord, NewClient},
};
use juriscoec_infra::repository::ClientRepository;

use crate::error::ClientError;

/// クライアント登録の入力
///
/// 必須項目の存在確認はハンドラで済ませた後の値。
#[derive(Debug, Clone)]
pub struct RegisterClientInput {
    pub name:  String,
    pub email: String,
    pub phone: String,
}

/// 制約名から重複メッセージを選ぶ
fn duplicate_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(c) if c.contains("email") => "A client with this email is already registered",
        Some(c) if c.contains("phone") => "A client with this phone number is already registered",
        _ => "A client with these details already exists",
    }
}

/// クライアント登録ユースケース
pub struct ClientUseCaseImpl {
    repository: Arc<dyn ClientRepository>,
}

impl ClientUseCaseImpl {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// クライアントを登録する
    ///
    /// 検証順は氏名 → メールアドレス → 電話番号。
    #[tracing::instrument(skip_all)]
    pub async fn register(&self, input: RegisterClientInput) -> Result<ClientRecord, ClientError> {
        let client =
            NewClient::new(&input.name, &input.email, &input.phone).map_err(DomainError::from)?;

        match self.repository.insert(&client).await {
            Ok(record) => {
                tracing::info!(client_id = %record.id, "クライアントを登録しました");
                Ok(record)
            }
            Err(e) => match e.as_unique_violation() {
                Some(constraint) => {
                    tracing::info!(constraint = ?constraint, "クライアントは登録済みです");
                    Err(ClientError::Duplicate(duplicate_message(constraint).to_string()))
                }
                None => Err(ClientError::Database(e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use juriscoec_infra::mock::MockClientRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn input(name: &str, email: &str, phone: &str) -> RegisterClientInput {
        RegisterClientInput {
            name:  name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[rstest]
    #[case(Some("clients_email_key"), "A client with this email is already registered")]
    #[case(Some("clients_phone_key"), "A client with this phone number is already registered")]
    #[case(Some("clients_pkey"), "A client with these details already exists")]
    #[case(None, "A client with these details already exists")]
    fn test_制約名から重複メッセージを選ぶ(#[case] constraint: Option<&str>, #[case] expected: &str) {
        assert_eq!(duplicate_message(constraint), expected);
    }

    #[tokio::test]
    async fn test_正規化した値で登録される() {
        let repo = MockClientRepository::new();
        let sut = ClientUseCaseImpl::new(Arc::new(repo.clone()));

        let record = sut
            .register(input(" Ana ", "ANA@X.COM", "0991234567"))
            .await
            .unwrap();

        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@x.com");
        assert_eq!(repo.clients(), vec![record]);
    }

    #[tokio::test]
    async fn test_メールアドレスの重複はduplicateになる() {
        let repo = MockClientRepository::new();
        let sut = ClientUseCaseImpl::new(Arc::new(repo));
        sut.register(input("Ana", "ana@x.com", "0991234567"))
            .await
            .unwrap();

        let result = sut.register(input("Ana", "ANA@x.com", "0981234567")).await;

        assert!(matches!(
            result,
            Err(ClientError::Duplicate(msg)) if msg == "A client with this email is already registered"
        ));
    }

    #[tokio::test]
    async fn test_不正な電話番号は保存せずbad_requestになる() {
        let repo = MockClientRepository::new();
        let sut = ClientUseCaseImpl::new(Arc::new(repo.clone()));

        let result = sut.register(input("Ana", "ana@x.com", "123")).await;

        assert!(matches!(
            result,
            Err(ClientError::BadRequest(msg)) if msg == "Phone must have a valid format"
        ));
        assert!(repo.clients().is_empty());
    }

    #[tokio::test]
    async fn test_その他の保存失敗はdatabaseエラーになる() {
        let repo = MockClientRepository::new();
        repo.fail_next_with("connection reset");
        let sut = ClientUseCaseImpl::new(Arc::new(repo));

        let result = sut.register(input("Ana", "ana@x.com", "0991234567")).await;

        assert!(matches!(result, Err(ClientError::Database(_))));
    }
}
