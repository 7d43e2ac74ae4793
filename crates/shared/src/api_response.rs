//! # `{ "data": T }` エンベロープ
//!
//! `POST /api/clients` の 201 レスポンスで使う。contact-service は Serialize、
//! contact-form は Deserialize で同じ型を使い、形式のずれを防ぐ。

use serde::{Deserialize, Serialize};

/// 作成系 API の成功レスポンス
///
/// ```
/// use juriscoec_shared::ApiResponse;
///
/// let body = serde_json::to_string(&ApiResponse::new(1)).unwrap();
/// assert_eq!(body, r#"{"data":1}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_dataキーの下に値を置く() {
        let json = serde_json::to_value(ApiResponse::new(json!({"email": "ana@x.com"}))).unwrap();

        assert_eq!(json, json!({"data": {"email": "ana@x.com"}}));
    }

    #[test]
    fn test_dataキーがないjsonは拒否する() {
        let result = serde_json::from_str::<ApiResponse<String>>(r#"{"error": "x"}"#);

        assert!(result.is_err());
    }
}
