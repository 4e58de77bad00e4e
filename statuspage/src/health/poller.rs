//! サイトポーラー
//!
//! タイムアウト付きの単発GETでエンドポイントの到達性を計測する。
//! 通信エラーはサイクルのエラーにはせず、結果の中に記録する。

use crate::common::error::CycleError;
use crate::types::poll::{Endpoint, PollResult};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// ポーリングのデフォルトタイムアウト（秒）
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// サイトポーラー
///
/// 内部の`Client`はコネクションプールを共有するハンドルで、
/// cloneしたポーラー同士で可変状態は共有しない。
#[derive(Debug, Clone)]
pub struct SitePoller {
    /// HTTPクライアント
    client: Client,
    /// 1リクエストあたりのタイムアウト
    timeout: Duration,
}

impl SitePoller {
    /// 新しいポーラーを作成
    pub fn new(timeout: Duration) -> Result<Self, CycleError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CycleError::HttpClient)?;

        Ok(Self { client, timeout })
    }

    /// タイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 単一エンドポイントをポーリング
    ///
    /// 経過時間はレスポンスヘッダ受信までを計測し、ボディは読まない。
    pub async fn poll(&self, endpoint: &Endpoint) -> PollResult {
        debug!(url = %endpoint, "Starting poll");

        let start = Instant::now();
        match self.client.get(endpoint.url()).send().await {
            Ok(response) => {
                let elapsed = start.elapsed();
                let result =
                    PollResult::response(endpoint.url(), response.status().as_u16(), elapsed);
                debug!(
                    url = %endpoint,
                    status_code = result.status_code,
                    elapsed_ms = result.elapsed_ms,
                    "Poll completed"
                );
                result
            }
            Err(e) => {
                let description = describe_error(&e, self.timeout);
                warn!(url = %endpoint, error = %description, "Poll failed");
                PollResult::transport_error(endpoint.url(), description)
            }
        }
    }
}

/// エラーチェーン全体を1行の説明にまとめる
fn describe_error(error: &reqwest::Error, timeout: Duration) -> String {
    let mut parts = Vec::new();
    if error.is_timeout() {
        parts.push(format!("request timed out after {}ms", timeout.as_millis()));
    }
    parts.push(error.to_string());

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }

    parts.join(": ")
}
