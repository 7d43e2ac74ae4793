//! # contact-form CLI
//!
//! 問い合わせフォームの送信を端末から行う。
//!
//! ```bash
//! contact-form --base-url http://localhost:13010 \
//!   --name "Ana" --phone 0991234567 --email ana@example.com \
//!   --subject "Consulta" --message "Hola"
//! ```
//!
//! メール送信に失敗した場合（入力エラーを含む）は終了コード 1 を返す。

use std::process::ExitCode;

use clap::Parser;
use juriscoec_contact_form::{
    ContactForm,
    HttpContactApi,
    SubmissionOrchestrator,
    TerminalNotifier,
};
use juriscoec_domain::contact::ContactSubmission;
use juriscoec_shared::observability::{TracingConfig, init_tracing};

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(about = "Send a message through the Juriscoec contact form")]
struct Cli {
    /// contact-service のベース URL
    #[arg(long, env = "CONTACT_SERVICE_URL", default_value = "http://localhost:13010")]
    base_url: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    subject: String,

    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("contact-form").with_default_filter("warn"));

    let cli = Cli::parse();

    let mut form = ContactForm::from(ContactSubmission {
        name:    cli.name,
        phone:   cli.phone,
        email:   cli.email,
        subject: cli.subject,
        message: cli.message,
    });

    let orchestrator =
        SubmissionOrchestrator::new(HttpContactApi::new(&cli.base_url), TerminalNotifier);

    if orchestrator.submit(&mut form).await.is_delivered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
