//! # リポジトリ実装
//!
//! 永続化を担当するリポジトリトレイトとその PostgreSQL 実装を提供する。
//! トレイト経由で扱うことで、ユースケース層はインメモリモックでテストできる。

pub mod client_repository;

pub use client_repository::{ClientRepository, PostgresClientRepository};
