//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジック。
//! 永続化とメール送信は infra のトレイト経由で行い、テストではモックに差し替える。

pub mod client;
pub mod notification;

pub use client::{ClientUseCaseImpl, RegisterClientInput};
pub use notification::{NotificationService, TemplateRenderer};
