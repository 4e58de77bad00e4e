//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! エンドポイント単位の通信エラーは`PollResult`に埋め込まれるためここには現れない。
//! ここに定義されるエラーはすべてサイクル全体を失敗させる致命的エラー。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 設定検証エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 監視対象が1件も設定されていない
    #[error("No endpoints configured")]
    NoEndpoints,

    /// URLとして解釈できない、またはhttp/https以外
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl {
        /// 指定されたURL文字列
        url: String,
        /// 不正と判断した理由
        reason: String,
    },

    /// 同じURLが複数回指定された
    #[error("Duplicate endpoint: {0}")]
    DuplicateEndpoint(String),

    /// タイムアウトが0
    #[error("Poll timeout must be greater than zero")]
    ZeroTimeout,
}

/// サイクルのどの段階で失敗したか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStage {
    /// 設定検証
    Config,
    /// HTTPクライアント生成
    HttpClient,
    /// テンプレート読み込み
    LoadTemplate,
    /// テンプレート構文解析
    ParseTemplate,
    /// テンプレート実行
    RenderTemplate,
    /// 一時ファイルのオープン
    OpenOutput,
    /// 一時ファイルへの書き込み
    WriteOutput,
    /// 一時ファイルのリネーム
    RenameOutput,
}

impl CycleStage {
    /// ログ出力用の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::HttpClient => "http_client",
            Self::LoadTemplate => "load_template",
            Self::ParseTemplate => "parse_template",
            Self::RenderTemplate => "render_template",
            Self::OpenOutput => "open_output",
            Self::WriteOutput => "write_output",
            Self::RenameOutput => "rename_output",
        }
    }
}

impl std::fmt::Display for CycleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// サイクル全体を中断させるエラー
#[derive(Debug, Error)]
pub enum CycleError {
    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTPクライアントを生成できなかった
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// テンプレートファイルを読み込めなかった
    #[error("Failed to read template data from {}: {source}", .path.display())]
    ConfigLoad {
        /// テンプレートファイルのパス
        path: PathBuf,
        /// 原因
        #[source]
        source: io::Error,
    },

    /// テンプレートの構文エラー
    #[error("Failed to parse template {name}: {source}")]
    TemplateParse {
        /// テンプレート名
        name: String,
        /// 原因
        #[source]
        source: minijinja::Error,
    },

    /// テンプレートにデータを適用できなかった（未定義フィールド参照など）
    #[error("Failed to render template {name}: {source}")]
    TemplateExecution {
        /// テンプレート名
        name: String,
        /// 原因
        #[source]
        source: minijinja::Error,
    },

    /// 一時ファイルを開けなかった
    #[error("Failed to open output file {}: {source}", .path.display())]
    Open {
        /// 一時ファイルのパス
        path: PathBuf,
        /// 原因
        #[source]
        source: io::Error,
    },

    /// 一時ファイルへの書き込みに失敗した（一時ファイルは削除済み）
    #[error("Failed to write output file {}: {source}", .path.display())]
    Write {
        /// 一時ファイルのパス
        path: PathBuf,
        /// 原因
        #[source]
        source: io::Error,
    },

    /// 一時ファイルを公開先にリネームできなかった（一時ファイルは残る）
    #[error("Failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        /// 一時ファイルのパス
        from: PathBuf,
        /// 公開先のパス
        to: PathBuf,
        /// 原因
        #[source]
        source: io::Error,
    },
}

impl CycleError {
    /// エラーが発生した段階
    pub fn stage(&self) -> CycleStage {
        match self {
            Self::Config(_) => CycleStage::Config,
            Self::HttpClient(_) => CycleStage::HttpClient,
            Self::ConfigLoad { .. } => CycleStage::LoadTemplate,
            Self::TemplateParse { .. } => CycleStage::ParseTemplate,
            Self::TemplateExecution { .. } => CycleStage::RenderTemplate,
            Self::Open { .. } => CycleStage::OpenOutput,
            Self::Write { .. } => CycleStage::WriteOutput,
            Self::Rename { .. } => CycleStage::RenameOutput,
        }
    }
}
