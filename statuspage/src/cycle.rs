//! サイクルオーケストレーター
//!
//! 1回の起動で次の順に1サイクルだけ実行する。
//!
//! 1. 全エンドポイントを並行にポーリング（1エンドポイント = 1タスク）
//! 2. 全件の結果が揃うまで待つ（各ポーラーが自分のタイムアウトで終わる）
//! 3. 集約
//! 4. テンプレート読み込み
//! 5. レンダリング
//! 6. アトミックな書き出し
//!
//! 3以降のいずれかが失敗したらサイクル全体が失敗する。リトライはしない。

use crate::aggregate::aggregate;
use crate::common::error::CycleError;
use crate::config::CycleConfig;
use crate::health::SitePoller;
use crate::output::OutputWriter;
use crate::render::{PageRenderer, TemplateLoader};
use crate::types::poll::{AggregateStatus, Endpoint, PollResult};
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::instrument::WithSubscriber;
use tracing::{debug_span, error, info, info_span, Instrument, Span};

/// 結果を返す前にタスクが終了した場合のエラー文言
const POLL_TASK_ABORTED: &str = "poll task terminated before reporting";

/// 成功したサイクルの概要
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// 全体ステータス
    pub status: AggregateStatus,
    /// 200を返したエンドポイント数
    pub healthy_count: usize,
    /// エンドポイント総数
    pub total_count: usize,
    /// 書き出したファイル
    pub output_path: PathBuf,
}

/// 1サイクルを実行するオーケストレーター
pub struct StatusCycle {
    config: CycleConfig,
    poller: SitePoller,
    loader: TemplateLoader,
    renderer: PageRenderer,
    writer: OutputWriter,
    span: Span,
}

impl StatusCycle {
    /// 設定から各コンポーネントを組み立てる
    pub fn new(config: CycleConfig) -> Result<Self, CycleError> {
        let poller = SitePoller::new(config.timeout())?;
        let loader = TemplateLoader::new(config.template_path());
        let writer = OutputWriter::new(config.output_path());
        let span = info_span!("cycle", endpoints = config.endpoints().len());

        Ok(Self {
            config,
            poller,
            loader,
            renderer: PageRenderer::new(),
            writer,
            span,
        })
    }

    /// 設定
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// 1サイクルを実行
    pub async fn run(&self) -> Result<CycleReport, CycleError> {
        self.run_steps().instrument(self.span.clone()).await
    }

    async fn run_steps(&self) -> Result<CycleReport, CycleError> {
        info!(
            endpoints = self.config.endpoints().len(),
            timeout_ms = self.config.timeout().as_millis() as u64,
            "Polling and updating status information"
        );

        let results = self.poll_all().await;
        let context = aggregate(results, Utc::now());
        info!(
            status = %context.status,
            healthy = context.healthy_count,
            total = context.total_count,
            "Aggregation complete"
        );

        let source = self.loader.load()?;
        let page = self
            .renderer
            .render(&self.loader.name(), &source, &context)?;
        self.writer.publish(&page)?;

        Ok(CycleReport {
            status: context.status,
            healthy_count: context.healthy_count,
            total_count: context.total_count,
            output_path: self.writer.destination().to_path_buf(),
        })
    }

    /// 全エンドポイントを並行にポーリングし、設定順の結果を返す
    ///
    /// 結果は到着順ではなくスロット番号で元のエンドポイントに対応付ける。
    /// 戻り値の件数は常にエンドポイント数と一致する。
    pub async fn poll_all(&self) -> Vec<PollResult> {
        let endpoints = self.config.endpoints();
        let (tx, mut rx) = mpsc::channel::<(usize, PollResult)>(endpoints.len().max(1));

        for (slot, endpoint) in endpoints.iter().cloned().enumerate() {
            let poller = self.poller.clone();
            let tx = tx.clone();
            let span = debug_span!(parent: &self.span, "poll", url = %endpoint);
            tokio::spawn(
                async move {
                    let result = poller.poll(&endpoint).await;
                    // 受信側が先に終わることはないので送信失敗は無視してよい
                    let _ = tx.send((slot, result)).await;
                }
                .instrument(span)
                .with_current_subscriber(),
            );
        }
        drop(tx);

        let mut slots: Vec<Option<PollResult>> = vec![None; endpoints.len()];
        let mut received = 0;
        while received < endpoints.len() {
            match rx.recv().await {
                Some((slot, result)) => {
                    slots[slot] = Some(result);
                    received += 1;
                }
                // 全送信側がドロップ（パニックしたタスクがある）
                None => break,
            }
        }

        fill_missing(endpoints, slots)
    }
}

/// 報告のなかったスロットを通信失敗として埋める
fn fill_missing(endpoints: &[Endpoint], slots: Vec<Option<PollResult>>) -> Vec<PollResult> {
    endpoints
        .iter()
        .zip(slots)
        .map(|(endpoint, slot)| {
            slot.unwrap_or_else(|| {
                error!(url = %endpoint, "Poll task terminated before reporting");
                PollResult::transport_error(endpoint.url(), POLL_TASK_ABORTED)
            })
        })
        .collect()
}
