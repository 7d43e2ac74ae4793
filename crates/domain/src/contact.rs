//! # 問い合わせ（Contact）
//!
//! Web サイトの問い合わせフォームから送信される内容と、そのバリデーションを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 / 関数 | ドメイン用語 | 備考 |
//! |---|---|---|
//! | [`ContactSubmission`] | 問い合わせ内容 | リクエスト 1 回分のみ存在し、永続化しない |
//! | [`validate_contact_form`] | フォーム検証 | 最初に失敗したチェックのメッセージのみ返す |
//! | [`is_valid_phone`] | エクアドル電話番号検証 | 携帯・固定電話の両方 |
//!
//! ## 検証の優先順位
//!
//! 1. 必須項目（name, phone, email, subject, message）の未入力
//! 2. メールアドレスの形式
//! 3. 電話番号の形式

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("メールアドレスの正規表現"));

/// 携帯電話: 0 + 通信事業者プレフィックス（9x）+ 7 桁
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0(98|99|96|97|95|93|92|91|90)[0-9]{7}$").expect("携帯電話番号の正規表現"));

/// 固定電話: 0 + 地域番号（2〜7）+ 7 桁
static LANDLINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[2-7][0-9]{7}$").expect("固定電話番号の正規表現"));

/// 問い合わせ内容
///
/// フォームの 5 項目。欠落または `null` のフィールドは空文字列としてデシリアライズされ、
/// JSON エラーではなく必須項目チェックで検出される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "null_as_empty")]
    pub name:    String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone:   String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email:   String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContactSubmission {
    /// 必須項目がすべて入力されているか（前後の空白は無視する）
    pub fn has_all_required_fields(&self) -> bool {
        [
            &self.name,
            &self.phone,
            &self.email,
            &self.subject,
            &self.message,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// 問い合わせフォームの検証エラー
///
/// `Display` はそのまま利用者に表示するメッセージ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Todos los campos son obligatorios")]
    RequiredFields,

    #[error("El formato del correo electrónico no es válido")]
    InvalidEmail,

    #[error("El formato del teléfono no es válido")]
    InvalidPhone,
}

/// メールアドレスが `local@domain.tld` の形をしているか
///
/// local / domain に空白と `@` を含まず、domain 側に `.` が 1 つ以上あること。
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// エクアドルの電話番号（携帯・固定）として有効か
///
/// 空白、ハイフン、括弧、`+` を取り除いてから判定する。
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')))
        .collect();

    MOBILE_PATTERN.is_match(&cleaned) || LANDLINE_PATTERN.is_match(&cleaned)
}

/// 問い合わせフォームを検証する
///
/// 最初に失敗したチェックのエラーのみを返す。
pub fn validate_contact_form(submission: &ContactSubmission) -> Result<(), ContactValidationError> {
    if !submission.has_all_required_fields() {
        return Err(ContactValidationError::RequiredFields);
    }

    if !is_valid_email(&submission.email) {
        return Err(ContactValidationError::InvalidEmail);
    }

    if !is_valid_phone(&submission.phone) {
        return Err(ContactValidationError::InvalidPhone);
    }

    Ok(())
}
