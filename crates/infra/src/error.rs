//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, UniqueViolation, Unexpected）
//!
//! 一意制約違反（SQLSTATE 23505）は `From<sqlx::Error>` の時点で
//! [`InfraErrorKind::UniqueViolation`] に振り分ける。ユースケース層は sqlx に
//! 依存せずに重複登録を判定でき、モックリポジトリからも同じエラーを再現できる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラーなど。一意制約違反は含まない。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 一意制約違反
    ///
    /// `constraint` は違反した制約名（例: `clients_email_key`）。
    /// ドライバが制約名を返さない場合は `None`。
    #[error("一意制約違反: {}", constraint.as_deref().unwrap_or("(不明)"))]
    UniqueViolation { constraint: Option<String> },

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// UniqueViolation の場合、違反した制約名を返す
    ///
    /// 制約名が不明な一意制約違反は `Some(None)`。
    pub fn as_unique_violation(&self) -> Option<Option<&str>> {
        match &self.kind {
            InfraErrorKind::UniqueViolation { constraint } => Some(constraint.as_deref()),
            _ => None,
        }
    }

    // ===== Convenience constructors =====

    /// 一意制約違反エラーを生成する
    pub fn unique_violation(constraint: Option<impl Into<String>>) -> Self {
        Self {
            kind:       InfraErrorKind::UniqueViolation {
                constraint: constraint.map(Into::into),
            },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        let violated = source
            .as_database_error()
            .filter(|db_err| db_err.is_unique_violation())
            .map(|db_err| db_err.constraint().map(str::to_string));

        let kind = match violated {
            Some(constraint) => InfraErrorKind::UniqueViolation { constraint },
            None => InfraErrorKind::Database(source),
        };

        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_client_repo");
            let _enter = span.enter();

            let err: InfraError = sqlx::Error::RowNotFound.into();

            assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_client_repo"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_unique_violationでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_insert");
            let _enter = span.enter();

            let err = InfraError::unique_violation(Some("clients_email_key"));

            assert_eq!(err.as_unique_violation(), Some(Some("clients_email_key")));
            let trace_str = format!("{}", err.span_trace());
            assert!(trace_str.contains("test_insert"));
        });
    }

    #[test]
    fn test_制約名が不明な一意制約違反() {
        let err = InfraError::unique_violation(None::<String>);

        assert_eq!(err.as_unique_violation(), Some(None));
        assert_eq!(err.to_string(), "一意制約違反: (不明)");
    }

    #[test]
    fn test_一意制約違反以外はas_unique_violationがnoneを返す() {
        let err = InfraError::unexpected("予期しないエラー");

        assert_eq!(err.as_unique_violation(), None);
    }

    #[test]
    fn test_displayがinfra_error_kindのメッセージを出力する() {
        let err = InfraError::unique_violation(Some("clients_phone_key"));

        assert_eq!(format!("{err}"), "一意制約違反: clients_phone_key");
    }

    #[test]
    fn test_sourceがinfra_error_kindに委譲する() {
        use std::error::Error;

        let err: InfraError = sqlx::Error::RowNotFound.into();

        // Database variant は sqlx::Error を source として持つ
        assert!(err.source().is_some());
    }
}
