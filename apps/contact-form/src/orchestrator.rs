//! # 問い合わせ送信フロー
//!
//! フォームの入力内容を検証し、contact-service の 2 つのエンドポイントを順に呼び出す。
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded ──▶ Idle
//!                            └──▶ Failed    ──▶ Idle
//! ```
//!
//! 1. `validate_contact_form` で検証（失敗時は通信しない）
//! 2. `POST /api/send-email`
//! 3. 2 が `success: true` の場合のみ `POST /api/clients`
//!
//! クライアント登録の失敗はメール送信の成功を取り消さない。409（登録済み）はログのみ、
//! それ以外の失敗は警告として利用者に伝える。

use juriscoec_domain::contact::{ContactSubmission, ContactValidationError, validate_contact_form};

use crate::{
    api::{ClientRegistration, ContactApi},
    error::ContactApiError,
    notifier::Notifier,
};

/// 送信成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

/// 送信失敗時のメッセージ（サーバーが理由を返さなかった場合）
pub const DELIVERY_FAILED_MESSAGE: &str =
    "There was an error sending your message. Please try again.";

/// クライアント登録に失敗した場合の警告
pub const REGISTRATION_WARNING: &str =
    "Your message was sent, but we could not save your contact details.";

/// フォームの送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// 問い合わせフォーム
///
/// 入力中の 5 項目と送信状態を保持する。`submit` は `&mut ContactForm` を取るため、
/// 1 つのフォームから送信が重なることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name:    String,
    pub phone:   String,
    pub email:   String,
    pub subject: String,
    pub message: String,
    state:       SubmissionState,
    #[cfg(test)]
    history:     Vec<SubmissionState>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// 送信中か（送信ボタンの無効化に使う）
    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// 現在の入力内容
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name:    self.name.clone(),
            phone:   self.phone.clone(),
            email:   self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    /// 入力内容を消去する（送信状態は変えない）
    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = ?self.state, to = ?next, "送信状態を更新");
        #[cfg(test)]
        self.history.push(next);
        self.state = next;
    }
}

impl From<ContactSubmission> for ContactForm {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            name: submission.name,
            phone: submission.phone,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            ..Self::default()
        }
    }
}

/// クライアント登録の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    /// 登録済み（409）
    AlreadyRegistered,
    /// 409 以外の失敗
    Failed(ContactApiError),
}

/// 送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 入力内容が不正（通信していない）
    Invalid(ContactValidationError),
    /// メール送信に失敗（クライアント登録は行っていない）
    DeliveryFailed(ContactApiError),
    /// メール送信に成功
    Delivered(RegistrationOutcome),
}

impl SubmissionOutcome {
    /// メールが送信されたか
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered(_))
    }
}

/// 送信フローの実行者
pub struct SubmissionOrchestrator<A, N> {
    api:      A,
    notifier: N,
}

impl<A: ContactApi, N: Notifier> SubmissionOrchestrator<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// フォームを送信する
    ///
    /// 終了時、フォームの状態は常に `Idle` に戻る。入力内容はメール送信に
    /// 成功した場合のみ消去する。
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, form: &mut ContactForm) -> SubmissionOutcome {
        let submission = form.submission();

        if let Err(e) = validate_contact_form(&submission) {
            tracing::debug!(error = %e, "入力内容が不正なため送信しない");
            self.notifier.error(&e.to_string());
            return SubmissionOutcome::Invalid(e);
        }

        form.transition(SubmissionState::Submitting);

        let outcome = self.deliver(&submission).await;

        if outcome.is_delivered() {
            form.transition(SubmissionState::Succeeded);
            form.reset();
        } else {
            form.transition(SubmissionState::Failed);
        }
        form.transition(SubmissionState::Idle);

        outcome
    }

    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        if let Err(e) = self.api.send_email(submission).await {
            tracing::error!(error = %e, "メール送信に失敗");
            self.notifier.error(&delivery_error_message(&e));
            return SubmissionOutcome::DeliveryFailed(e);
        }

        let registration = ClientRegistration::from(submission);
        let registration = match self.api.register_client(&registration).await {
            Ok(record) => {
                tracing::info!(client_id = %record.id, "クライアントを登録");
                RegistrationOutcome::Registered
            }
            Err(ContactApiError::Duplicate(message)) => {
                tracing::info!(%message, "登録済みのクライアント");
                RegistrationOutcome::AlreadyRegistered
            }
            Err(e) => {
                tracing::warn!(error = %e, "クライアント登録に失敗");
                self.notifier.warning(REGISTRATION_WARNING);
                RegistrationOutcome::Failed(e)
            }
        };

        self.notifier.success(SUCCESS_MESSAGE);
        SubmissionOutcome::Delivered(registration)
    }
}

/// メール送信失敗時に利用者へ表示するメッセージ
///
/// 400（検証エラー）はサーバーの文言をそのまま表示し、それ以外は共通の文言にする。
fn delivery_error_message(err: &ContactApiError) -> String {
    match err {
        ContactApiError::Rejected { status: 400, message } => message.clone(),
        _ => DELIVERY_FAILED_MESSAGE.to_string(),
    }
}
