//! # Contact Service ライブラリ
//!
//! 問い合わせメール送信とクライアント登録の HTTP API。
//! ルーター構築（[`app_builder`]）を公開し、`main.rs` と結合テストで共有する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
