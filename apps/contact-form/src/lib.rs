//! # contact-form
//!
//! Web サイトの問い合わせフォームのクライアント側ロジック。
//!
//! - [`orchestrator`]: 入力検証と contact-service 呼び出しの順序制御
//! - [`api`]: contact-service の HTTP クライアント
//! - [`notifier`]: 利用者への結果表示

pub mod api;
pub mod error;
pub mod notifier;
pub mod orchestrator;

pub use api::{ContactApi, HttpContactApi};
pub use error::ContactApiError;
pub use notifier::{Notifier, TerminalNotifier};
pub use orchestrator::{ContactForm, SubmissionOrchestrator, SubmissionOutcome, SubmissionState};
