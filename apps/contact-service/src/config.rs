//! # Contact Service 設定
//!
//! 環境変数から Contact Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト |
//! |--------|------|-----------|
//! | `CONTACT_HOST` | No | `0.0.0.0` |
//! | `CONTACT_PORT` | **Yes** | - |
//! | `DATABASE_URL` | **Yes** | - |
//! | `NOTIFICATION_BACKEND` | No | `noop`（`resend` / `smtp` / `noop`） |
//! | `RESEND_API_KEY` | backend=resend の場合 | - |
//! | `RESEND_API_URL` | No | `https://api.resend.com/emails` |
//! | `NOTIFICATION_FROM_ADDRESS` | No | `Formulario Web <no-reply@juriscoec.com>` |
//! | `NOTIFICATION_TO_ADDRESS` | No | `abogadazo@juriscoec.com` |
//! | `NOTIFICATION_TIMEOUT_SECS` | No | `10` |
//! | `SMTP_HOST` / `SMTP_PORT` | No | `localhost` / `1025` |

use std::{env, str::FromStr, time::Duration};

use juriscoec_domain::notification::NotificationBackend;
use juriscoec_infra::notification::DEFAULT_RESEND_API_URL;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Contact Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 通知機能の設定
#[derive(Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド
    pub backend:        NotificationBackend,
    /// Resend API キー（backend=resend の場合は必須）
    pub resend_api_key: Option<String>,
    /// Resend API エンドポイント
    pub resend_api_url: String,
    /// 送信元
    pub from_address:   String,
    /// 送信先（事務所の受信箱）
    pub to_address:     String,
    /// 送信リクエストのタイムアウト
    pub timeout:        Duration,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:      String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:      u16,
}

impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("backend", &self.backend)
            .field("resend_api_key", &self.resend_api_key.as_ref().map(|_| "***"))
            .field("resend_api_url", &self.resend_api_url)
            .field("from_address", &self.from_address)
            .field("to_address", &self.to_address)
            .field("timeout", &self.timeout)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

impl ContactServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の値取得関数から設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:         lookup("CONTACT_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:         parse_var(&lookup, "CONTACT_PORT", None)?,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = parse_var(lookup, "NOTIFICATION_BACKEND", Some(NotificationBackend::Noop))?;
        let resend_api_key = lookup("RESEND_API_KEY").filter(|key| !key.is_empty());

        if backend == NotificationBackend::Resend && resend_api_key.is_none() {
            return Err(ConfigError::Missing("RESEND_API_KEY"));
        }

        Ok(Self {
            backend,
            resend_api_key,
            resend_api_url: lookup("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            from_address: lookup("NOTIFICATION_FROM_ADDRESS")
                .unwrap_or_else(|| "Formulario Web <no-reply@juriscoec.com>".to_string()),
            to_address: lookup("NOTIFICATION_TO_ADDRESS")
                .unwrap_or_else(|| "abogadazo@juriscoec.com".to_string()),
            timeout: Duration::from_secs(parse_var(lookup, "NOTIFICATION_TIMEOUT_SECS", Some(10))?),
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port: parse_var(lookup, "SMTP_PORT", Some(1025))?,
        })
    }
}

/// 環境変数を `T` としてパースする
///
/// 未設定の場合は `default` を返し、`default` が `None` なら必須エラーにする。
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}
