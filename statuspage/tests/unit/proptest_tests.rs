//! Property-based tests using proptest

use proptest::prelude::*;
use std::time::Duration;

use chrono::Utc;
use statuspage::aggregate::{aggregate, classify};
use statuspage::types::poll::SENTINEL_STATUS_CODE;
use statuspage::{AggregateStatus, PollResult};

/// 200を多めに含むステータスコード
fn status_code() -> impl Strategy<Value = u16> {
    prop_oneof![
        3 => Just(200u16),
        1 => Just(SENTINEL_STATUS_CODE),
        2 => 100u16..600,
    ]
}

fn poll_results() -> impl Strategy<Value = Vec<PollResult>> {
    prop::collection::vec((status_code(), 0u64..60_000), 1..30).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (code, ms))| {
                let url = format!("https://site{i}.example/");
                if code == SENTINEL_STATUS_CODE {
                    PollResult::transport_error(url, "connection refused")
                } else {
                    PollResult::response(url, code, Duration::from_millis(ms))
                }
            })
            .collect()
    })
}

proptest! {
    /// 判定は200の件数のみで決まる
    #[test]
    fn classification_law(results in poll_results()) {
        let healthy = results.iter().filter(|r| r.status_code == 200).count();
        let expected = if healthy == results.len() {
            AggregateStatus::AllHealthy
        } else if healthy == 0 {
            AggregateStatus::AllDown
        } else {
            AggregateStatus::Partial
        };
        prop_assert_eq!(classify(&results), expected);
    }

    /// 並び順に依存しない
    #[test]
    fn classification_ignores_order(
        (results, shuffled) in poll_results()
            .prop_flat_map(|results| (Just(results.clone()), Just(results).prop_shuffle()))
    ) {
        prop_assert_eq!(classify(&results), classify(&shuffled));
    }

    /// レイテンシに依存しない
    #[test]
    fn classification_ignores_latency(results in poll_results(), ms in 0u64..120_000) {
        let retimed: Vec<_> = results
            .iter()
            .map(|r| PollResult { elapsed_ms: ms as f64, ..r.clone() })
            .collect();
        prop_assert_eq!(classify(&results), classify(&retimed));
    }

    /// 集約しても件数と順序は変わらない
    #[test]
    fn aggregate_preserves_results(results in poll_results()) {
        let urls: Vec<_> = results.iter().map(|r| r.url.clone()).collect();
        let context = aggregate(results, Utc::now());
        prop_assert_eq!(context.total_count, urls.len());
        let context_urls: Vec<_> = context.results.iter().map(|r| r.url.clone()).collect();
        prop_assert_eq!(context_urls, urls);
    }
}
