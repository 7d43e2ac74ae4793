//! # クライアント登録ハンドラ
//!
//! `POST /api/clients`
//!
//! リクエストの各項目は `serde_json::Value` で受け取り、
//! 「未入力」と「型が不正」を区別して検証する:
//!
//! 1. Content-Type が JSON でない → 400
//! 2. JSON として解釈できない → 400
//! 3. name / email / phone のいずれかが欠落・null・空文字列 → 400
//! 4. 各項目の型と形式（氏名 → メールアドレス → 電話番号の順）→ 400
//! 5. 重複 → 409、その他の保存失敗 → 500

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use juriscoec_shared::ApiResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::ClientError,
    usecase::{ClientUseCaseImpl, RegisterClientInput},
};

const CONTENT_TYPE_MESSAGE: &str = "Content-Type must be application/json";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";
const REQUIRED_FIELDS_MESSAGE: &str = "Fields name, email and phone are required";

/// クライアント登録 API の共有状態
pub struct ClientState {
    pub usecase: ClientUseCaseImpl,
}

/// クライアント登録リクエスト
///
/// 型の検証を自前で行うため、各項目は任意の JSON 値として受け取る。
#[derive(Debug, Default, Deserialize)]
pub struct RegisterClientRequest {
    #[serde(default)]
    pub name:  Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
}

impl RegisterClientRequest {
    fn has_all_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .all(|field| !is_missing(field))
    }

    /// 文字列でない値は空文字列として扱い、形式チェックで弾く
    fn into_input(self) -> RegisterClientInput {
        RegisterClientInput {
            name:  into_text(self.name),
            email: into_text(self.email),
            phone: into_text(self.phone),
        }
    }
}

fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn into_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

/// POST /api/clients
///
/// 成功時は 201 と `{data: ClientRecord}` を返す。
#[tracing::instrument(skip_all)]
pub async fn register_client(
    State(state): State<Arc<ClientState>>,
    payload: Result<Json<RegisterClientRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ClientError> {
    let Json(request) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ClientError::BadRequest(CONTENT_TYPE_MESSAGE.to_string())
        }
        _ => ClientError::BadRequest(INVALID_JSON_MESSAGE.to_string()),
    })?;

    if !request.has_all_required_fields() {
        return Err(ClientError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let record = state.usecase.register(request.into_input()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(record))))
}
