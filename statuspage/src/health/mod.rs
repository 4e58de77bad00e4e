//! エンドポイントのポーリング
//!
//! 1エンドポイントにつき1回だけGETを発行し、結果を`PollResult`として返す。
//! リトライは行わない。

/// サイトポーラー
pub mod poller;

pub use poller::SitePoller;
