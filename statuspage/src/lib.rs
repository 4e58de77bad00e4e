//! Static status page generator
//!
//! 少数のWebエンドポイントの到達性をチェックし、その結果を静的HTMLとして書き出す。
//! 1回の起動で1サイクル（ポーリング → 集約 → レンダリング → 書き出し）のみを実行し、
//! 繰り返し実行は外部スケジューラ（cron等）に任せる。

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// 型定義
pub mod types;

/// エンドポイントのポーリング
pub mod health;

/// ポーリング結果の集約
pub mod aggregate;

/// テンプレート読み込み・レンダリング
pub mod render;

/// 出力ファイルのアトミックな書き出し
pub mod output;

/// 1サイクルの実行制御
pub mod cycle;

/// 設定管理
pub mod config;

/// CLIインターフェース
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

pub use common::error::{ConfigError, CycleError, CycleStage};
pub use cycle::{CycleReport, StatusCycle};
pub use types::poll::{AggregateStatus, Endpoint, PollResult, RenderContext};
