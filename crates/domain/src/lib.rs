//! # Juriscoec ドメイン層
//!
//! 問い合わせフォームとクライアント登録のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **純粋関数によるバリデーション**: I/O を持たず、どの層からも呼び出せる
//! - **正規化済みの型**: [`client::NewClient`] は検証・正規化を通過した値のみを保持する
//! - **インフラ非依存**: DB やメール送信の詳細は `infra` クレートの責務
//!
//! ## 依存関係の方向
//!
//! ```text
//! contact-service → infra → domain
//! contact-form ─────────────↗
//! ```
//!
//! ## モジュール構成
//!
//! - [`contact`] - 問い合わせ内容とフォームバリデーション
//! - [`client`] - クライアント（見込み顧客）レコード
//! - [`notification`] - メール通知のメッセージとエラー
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層エラー
//!
//! ## 使用例
//!
//! ```rust
//! use juriscoec_domain::contact::{ContactSubmission, validate_contact_form};
//!
//! let submission = ContactSubmission {
//!     name:    "Ana Pérez".to_string(),
//!     phone:   "0991234567".to_string(),
//!     email:   "ana@example.com".to_string(),
//!     subject: "Consulta laboral".to_string(),
//!     message: "Necesito asesoría.".to_string(),
//! };
//! assert!(validate_contact_form(&submission).is_ok());
//! ```

pub mod client;
pub mod clock;
pub mod contact;
pub mod error;
pub mod notification;

pub use error::DomainError;
