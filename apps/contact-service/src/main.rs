//! # Contact Service サーバー
//!
//! Web サイトの問い合わせフォームから呼ばれる API サーバー。
//!
//! - `POST /api/send-email`: 問い合わせ内容を事務所にメール送信
//! - `POST /api/clients`: 問い合わせ者をクライアントとして登録
//!
//! 環境変数は [`config`](juriscoec_contact_service::config) を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! CONTACT_PORT=13010 DATABASE_URL=postgres://... cargo run -p juriscoec-contact-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use juriscoec_contact_service::{
    app_builder::{AppDependencies, build_app, build_notification_sender},
    config::ContactServiceConfig,
};
use juriscoec_domain::clock::SystemClock;
use juriscoec_infra::{db, repository::PostgresClientRepository};
use juriscoec_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("contact-service"));

    let config = ContactServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Contact Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    let app = build_app(AppDependencies {
        client_repository:   Arc::new(PostgresClientRepository::new(pool.clone())),
        notification_sender: build_notification_sender(&config.notification)?,
        database:            Arc::new(pool),
        clock:               Arc::new(SystemClock),
        recipient:           config.notification.to_address.clone(),
    })?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Contact Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
