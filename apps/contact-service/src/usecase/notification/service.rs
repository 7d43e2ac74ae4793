//! # 通知サービス
//!
//! テンプレートレンダリング → メール送信を統合するサービス。
//!
//! 送信失敗はそのまま呼び出し元に返す（fire-and-forget にはしない）。

use std::sync::Arc;

use juriscoec_domain::{
    clock::Clock,
    contact::ContactSubmission,
    notification::NotificationError,
};
use juriscoec_infra::notification::NotificationSender;

use super::TemplateRenderer;

/// 通知サービス
pub struct NotificationService {
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    clock:             Arc<dyn Clock>,
    recipient:         String,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        clock: Arc<dyn Clock>,
        recipient: String,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            clock,
            recipient,
        }
    }

    /// 問い合わせメールを事務所に送信する
    ///
    /// `submission` は検証済みであること。
    #[tracing::instrument(skip_all, fields(subject = %submission.subject))]
    pub async fn send_contact_message(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), NotificationError> {
        let email = self
            .template_renderer
            .render(submission, &self.recipient, self.clock.now())?;

        self.sender.send_email(&email).await?;

        tracing::info!(recipient = %self.recipient, "問い合わせメールを送信しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use juriscoec_domain::clock::FixedClock;
    use juriscoec_infra::mock::MockNotificationSender;
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name:    "Ana".to_string(),
            phone:   "0991234567".to_string(),
            email:   "ana@example.com".to_string(),
            subject: "Consulta".to_string(),
            message: "Hola".to_string(),
        }
    }

    fn service(sender: MockNotificationSender) -> NotificationService {
        NotificationService::new(
            Arc::new(sender),
            TemplateRenderer::new().unwrap(),
            Arc::new(FixedClock::new(
                DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            )),
            "abogadazo@juriscoec.com".to_string(),
        )
    }

    #[tokio::test]
    async fn 生成したメールを設定済みの宛先に送信する() {
        let sender = MockNotificationSender::new();
        let sut = service(sender.clone());

        sut.send_contact_message(&submission()).await.unwrap();

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "abogadazo@juriscoec.com");
        assert_eq!(sent[0].subject, "Nuevo mensaje de Ana");
        assert!(sent[0].text_body.contains("14/11/2023 17:13:20"));
    }

    #[tokio::test]
    async fn 送信失敗はエラーとして返す() {
        let sut = service(MockNotificationSender::failing());

        let result = sut.send_contact_message(&submission()).await;

        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
