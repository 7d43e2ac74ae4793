//! 送信しない NotificationSender
//!
//! `NOTIFICATION_BACKEND=noop`（既定値）で選ばれる。宛先と件名を info ログに残すだけで、
//! 本文は出力しない。

use async_trait::async_trait;
use juriscoec_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            reply_to = email.reply_to.as_deref().unwrap_or("-"),
            subject = %email.subject,
            "noop: 問い合わせメールを送信せずに破棄"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_返信先の有無にかかわらず成功する() {
        let email = EmailMessage {
            to:        "abogadazo@juriscoec.com".to_string(),
            reply_to:  None,
            subject:   "Nuevo mensaje de Ana".to_string(),
            html_body: "<p>Hola</p>".to_string(),
            text_body: "Hola".to_string(),
        };
        let with_reply_to = EmailMessage {
            reply_to: Some("ana@example.com".to_string()),
            ..email.clone()
        };

        assert!(NoopNotificationSender.send_email(&email).await.is_ok());
        assert!(NoopNotificationSender.send_email(&with_reply_to).await.is_ok());
    }
}
