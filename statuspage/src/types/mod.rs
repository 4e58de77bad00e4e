//! 型定義モジュール

/// ポーリング結果・集約結果の型
pub mod poll;

pub use poll::{AggregateStatus, Endpoint, PollResult, RenderContext};
