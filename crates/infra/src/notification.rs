//! # 通知送信
//!
//! 問い合わせメールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **3 つの実装**: Resend（本番）、SMTP（Mailpit 開発用）、Noop（テスト・無効化用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod noop;
mod resend;
mod smtp;

use async_trait::async_trait;
use juriscoec_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use resend::{DEFAULT_RESEND_API_URL, ResendConfig, ResendNotificationSender};
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// Resend / SMTP / Noop の 3 実装を環境変数で切り替える。
/// 送信元アドレスは各実装が保持し、[`EmailMessage`] には含めない。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
