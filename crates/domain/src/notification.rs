//! # 通知
//!
//! 問い合わせメール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **テンプレート分離**: メール生成（TemplateRenderer）は contact-service の責務
//! - **送信の抽象化**: 生成済みの [`EmailMessage`] を `NotificationSender`（infra）に渡す
//! - **エラーは内部向け**: [`NotificationError`] の内容はログにのみ出力し、利用者には返さない

use strum::IntoStaticStr;
use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 送信バックエンドの種別
///
/// 環境変数 `NOTIFICATION_BACKEND` の値に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationBackend {
    /// Resend（トランザクションメール API、本番）
    Resend,
    /// SMTP（Mailpit 等、開発）
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス（事務所の受信箱）
    pub to:        String,
    /// 返信先（問い合わせ者のメールアドレス）
    pub reply_to:  Option<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn notification_backend_の文字列変換が正しい() {
        assert_eq!(NotificationBackend::Resend.to_string(), "resend");
        assert_eq!(NotificationBackend::Smtp.to_string(), "smtp");
        assert_eq!(NotificationBackend::Noop.to_string(), "noop");

        assert_eq!(
            NotificationBackend::from_str("resend").unwrap(),
            NotificationBackend::Resend
        );
        assert_eq!(
            NotificationBackend::from_str("smtp").unwrap(),
            NotificationBackend::Smtp
        );
        assert!(NotificationBackend::from_str("ses").is_err());
    }

    #[test]
    fn notification_errorのメッセージに原因が含まれる() {
        let err = NotificationError::SendFailed("HTTP 422".to_string());
        assert_eq!(err.to_string(), "メール送信に失敗: HTTP 422");
    }
}
