//! ポーリング結果型定義
//!
//! 監視対象エンドポイント、1回のポーリング結果、全体ステータス、
//! テンプレートに渡すレンダリングコンテキスト。

use serde::Serialize;
use std::time::Duration;

/// 正常とみなすHTTPステータスコード
pub const HEALTHY_STATUS_CODE: u16 = 200;

/// レスポンスを得られなかったことを示すステータスコード（HTTPの範囲外）
pub const SENTINEL_STATUS_CODE: u16 = 666;

/// 監視対象エンドポイント
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// URL文字列からエンドポイントを作成（検証は`CycleConfig`で行う）
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// URL文字列
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// 1エンドポイントに対する1回のポーリング結果
///
/// 生成後に変更されることはない。非2xxのステータスはエラーではなく
/// 正常な計測値として扱い、`error`は通信レベルの失敗時のみ設定される。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollResult {
    /// ポーリング対象URL
    pub url: String,
    /// HTTPステータスコード（通信失敗時は`SENTINEL_STATUS_CODE`）
    pub status_code: u16,
    /// リクエスト開始からレスポンスヘッダ受信までの時間（ミリ秒）
    pub elapsed_ms: f64,
    /// 通信エラーの内容
    pub error: Option<String>,
}

impl PollResult {
    /// レスポンスを受信できた場合の結果
    pub fn response(url: impl Into<String>, status_code: u16, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            status_code,
            elapsed_ms: elapsed.as_nanos() as f64 / 1_000_000.0,
            error: None,
        }
    }

    /// 通信レベルで失敗した場合の結果
    pub fn transport_error(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: SENTINEL_STATUS_CODE,
            elapsed_ms: 0.0,
            error: Some(error.into()),
        }
    }

    /// ステータスコードが200か
    pub fn is_healthy(&self) -> bool {
        self.status_code == HEALTHY_STATUS_CODE
    }

    /// 何らかのHTTPレスポンスを得られたか
    pub fn is_reachable(&self) -> bool {
        self.status_code != SENTINEL_STATUS_CODE
    }
}

/// 全体ステータス（3値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateStatus {
    /// 全エンドポイントが200
    AllHealthy,
    /// 一部のみ200
    Partial,
    /// 200が1件もない
    AllDown,
}

impl AggregateStatus {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllHealthy => "all_healthy",
            Self::Partial => "partial",
            Self::AllDown => "all_down",
        }
    }

    /// 数値レベル（0: green, 1: orange, 2: red）
    pub fn level(&self) -> u8 {
        match self {
            Self::AllHealthy => 0,
            Self::Partial => 1,
            Self::AllDown => 2,
        }
    }
}

impl std::fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// テンプレートに渡すデータ
///
/// `results`は設定されたエンドポイントの順序に並ぶ（到着順ではない）。
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// 全体ステータス
    pub status: AggregateStatus,
    /// 全体ステータスの数値レベル
    pub status_level: u8,
    /// 集約時刻
    pub timestamp: String,
    /// 200を返したエンドポイント数
    pub healthy_count: usize,
    /// エンドポイント総数
    pub total_count: usize,
    /// エンドポイントごとの結果
    pub results: Vec<PollResult>,
}
