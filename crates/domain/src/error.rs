//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! 問い合わせフォームとクライアント登録はそれぞれ固有のエラー型
//! （[`ContactValidationError`](crate::contact::ContactValidationError)、
//! [`ClientValidationError`](crate::client::ClientValidationError)）を持ち、
//! 呼び出し側でまとめて扱いたい場合は `DomainError` に変換する。

use thiserror::Error;

use crate::{client::ClientValidationError, contact::ContactValidationError};

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    /// メッセージはそのまま利用者に表示できる文言とする。
    #[error("{0}")]
    Validation(String),
}

impl From<ContactValidationError> for DomainError {
    fn from(err: ContactValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ClientValidationError> for DomainError {
    fn from(err: ClientValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
