//! ロギング初期化ユーティリティ
//!
//! グローバルなsubscriberは登録せず、`Dispatch`を返す。
//! 呼び出し側がプロセスの生存期間だけデフォルトとして設定し、
//! spawnするタスクへは`WithSubscriber`で明示的に引き継ぐ。

use crate::cli::Cli;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// ログ出力設定
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    /// デバッグログを有効化
    pub debug: bool,
    /// タイムスタンプを出力
    pub timestamps: bool,
}

impl From<&Cli> for LogOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            debug: cli.debug,
            timestamps: cli.timestamp,
        }
    }
}

/// subscriberを構築して`Dispatch`として返す
///
/// `RUST_LOG`が設定されていればそれを優先する。
pub fn build(options: LogOptions) -> Dispatch {
    let level = if options.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if options.timestamps {
        Dispatch::new(builder.finish())
    } else {
        Dispatch::new(builder.without_time().finish())
    }
}
