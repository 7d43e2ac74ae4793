//! # アプリケーション構築
//!
//! DI（State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! 結合テストは同じルーターをモックの依存で組み立てて使う。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use juriscoec_domain::{clock::Clock, notification::NotificationBackend};
use juriscoec_infra::{
    notification::{
        NoopNotificationSender,
        NotificationSender,
        ResendConfig,
        ResendNotificationSender,
        SmtpNotificationSender,
    },
    repository::ClientRepository,
};
use juriscoec_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::NotificationConfig,
    handler::{
        ClientState,
        ContactState,
        DatabaseProbe,
        ReadinessState,
        health_check,
        readiness_check,
        register_client,
        send_email,
    },
    usecase::{ClientUseCaseImpl, NotificationService, TemplateRenderer},
};

/// ルーター構築に必要な依存コンポーネント
pub struct AppDependencies {
    pub client_repository:   Arc<dyn ClientRepository>,
    pub notification_sender: Arc<dyn NotificationSender>,
    pub database:            Arc<dyn DatabaseProbe>,
    pub clock:               Arc<dyn Clock>,
    /// 問い合わせメールの送信先
    pub recipient:           String,
}

/// 設定に応じた NotificationSender を生成する
pub fn build_notification_sender(
    config: &NotificationConfig,
) -> anyhow::Result<Arc<dyn NotificationSender>> {
    let sender: Arc<dyn NotificationSender> = match config.backend {
        NotificationBackend::Resend => {
            let api_key = config
                .resend_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("RESEND_API_KEY が設定されていません"))?;
            Arc::new(ResendNotificationSender::new(ResendConfig {
                api_url: config.resend_api_url.clone(),
                api_key,
                from_address: config.from_address.clone(),
                timeout: config.timeout,
            })?)
        }
        NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            config.from_address.clone(),
        )),
        NotificationBackend::Noop => Arc::new(NoopNotificationSender),
    };

    tracing::info!(backend = %config.backend, "通知バックエンドを初期化しました");
    Ok(sender)
}

/// ルーターを構築する
///
/// テンプレートの登録に失敗した場合はエラーを返す。
pub fn build_app(deps: AppDependencies) -> anyhow::Result<Router> {
    let notification = NotificationService::new(
        deps.notification_sender,
        TemplateRenderer::new()?,
        deps.clock,
        deps.recipient,
    );
    let contact_state = Arc::new(ContactState { notification });
    let client_state = Arc::new(ClientState {
        usecase: ClientUseCaseImpl::new(deps.client_repository),
    });
    let readiness_state = Arc::new(ReadinessState {
        database: deps.database,
    });

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/api/send-email", post(send_email))
                .with_state(contact_state),
        )
        .merge(
            Router::new()
                .route("/api/clients", post(register_client))
                .with_state(client_state),
        )
        // 下に書いたものが外側:
        // SetRequestIdLayer で ID を確定 → TraceLayer のスパンに記録 → レスポンスヘッダーへコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}
