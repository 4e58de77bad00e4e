//! ポーリング結果の集約
//!
//! 200を返した件数だけで全体ステータスを決める純粋関数。
//! 順序やレイテンシには依存しない。

use crate::types::poll::{AggregateStatus, PollResult, RenderContext};
use chrono::{DateTime, Utc};

/// タイムスタンプの書式（RFC 850形式）
pub const TIMESTAMP_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S %Z";

/// 全体ステータスを判定
///
/// 全件200なら`AllHealthy`、1件もなければ`AllDown`、それ以外は`Partial`。
pub fn classify(results: &[PollResult]) -> AggregateStatus {
    let total = results.len();
    let healthy = results.iter().filter(|r| r.is_healthy()).count();

    if healthy == total {
        AggregateStatus::AllHealthy
    } else if healthy == 0 {
        AggregateStatus::AllDown
    } else {
        AggregateStatus::Partial
    }
}

/// 結果を集約してレンダリングコンテキストを作る
///
/// `results`は設定順に並んでいる前提で、順序はそのまま保持する。
pub fn aggregate(results: Vec<PollResult>, now: DateTime<Utc>) -> RenderContext {
    let status = classify(&results);
    let healthy_count = results.iter().filter(|r| r.is_healthy()).count();

    RenderContext {
        status,
        status_level: status.level(),
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        healthy_count,
        total_count: results.len(),
        results,
    }
}
