//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで問い合わせメールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **HTML は自動エスケープ**: `.html` テンプレートは tera の autoescape 対象。
//!   本文（message）のみ、エスケープ後に改行を `<br>` に変換する
//! - **件名パターン**: `Nuevo mensaje de {name}`
//! - **受信日時**: エクアドル時間（UTC−05:00）で `dd/mm/yyyy HH:MM:SS`

use chrono::{DateTime, Utc};
use juriscoec_domain::{
    clock::to_ecuador_time,
    contact::ContactSubmission,
    notification::{EmailMessage, NotificationError},
};
use tera::{Context, Tera};

const HTML_TEMPLATE: &str = "contact_message.html";
const TEXT_TEMPLATE: &str = "contact_message.txt";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`ContactSubmission` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    HTML_TEMPLATE,
                    include_str!("../../../templates/notifications/contact_message.html"),
                ),
                (
                    TEXT_TEMPLATE,
                    include_str!("../../../templates/notifications/contact_message.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 問い合わせ内容からメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `submission`: 検証済みの問い合わせ内容
    /// - `recipient`: 送信先（事務所の受信箱）
    /// - `received_at`: 受信日時（UTC）
    pub fn render(
        &self,
        submission: &ContactSubmission,
        recipient: &str,
        received_at: DateTime<Utc>,
    ) -> Result<EmailMessage, NotificationError> {
        let received_at = to_ecuador_time(received_at)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string();

        let mut context = Context::new();
        context.insert("name", &submission.name);
        context.insert("phone", &submission.phone);
        context.insert("email", &submission.email);
        context.insert("subject", &submission.subject);
        context.insert("message", &submission.message);
        context.insert("received_at", &received_at);

        let html_body = self
            .engine
            .render(HTML_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(TEXT_TEMPLATE, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: recipient.to_string(),
            reply_to: Some(submission.email.clone()),
            subject: format!("Nuevo mensaje de {}", submission.name),
            html_body,
            text_body,
        })
    }
}
