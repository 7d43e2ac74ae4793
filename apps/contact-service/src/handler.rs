//! # HTTP ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/send-email` - 問い合わせメールの送信
//! - `POST /api/clients` - クライアント登録
//! - `GET /health` - ヘルスチェック
//! - `GET /health/ready` - Readiness Check（DB 疎通）
//!
//! 2 つの API は独立しており、サーバー側で呼び出し順を強制しない。
//! 「送信成功後に登録」の順序は contact-form（クライアント）が担う。

pub mod client;
pub mod health;
pub mod send_email;

pub use client::{ClientState, register_client};
pub use health::{DatabaseProbe, ReadinessState, health_check, readiness_check};
pub use send_email::{ContactState, send_email};
