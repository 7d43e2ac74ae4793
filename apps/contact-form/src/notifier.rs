//! # 利用者への通知（トースト）
//!
//! 送信結果を利用者に伝える手段の抽象。CLI では標準出力・標準エラーに表示する。

/// 送信結果の通知先
pub trait Notifier: Send + Sync {
    /// 成功
    fn success(&self, message: &str);

    /// 処理は続行できたが、利用者に知らせるべき問題
    fn warning(&self, message: &str);

    /// 失敗
    fn error(&self, message: &str);
}

/// 端末に表示する Notifier
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✔ {message}");
    }

    fn warning(&self, message: &str) {
        eprintln!("⚠ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}
