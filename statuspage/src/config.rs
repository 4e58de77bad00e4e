//! Cycle configuration
//!
//! Validated inputs for one poll-and-render cycle. Values come from the CLI
//! (which also reads `STATUSPAGE_*` environment variables).

use crate::cli::Cli;
use crate::common::error::ConfigError;
use crate::types::poll::Endpoint;
use reqwest::Url;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトの監視対象URL
pub const DEFAULT_URLS: &[&str] = &[
    "https://www.hackenkunjeleren.nl/",
    "https://community.hackenkunjeleren.nl/",
];

/// デフォルトのテンプレートディレクトリ
pub const DEFAULT_TEMPLATES_DIR: &str = "/usr/share/statuspage/templates";

/// デフォルトの出力ディレクトリ
pub const DEFAULT_OUTPUT_DIR: &str = "/srv/www/statuspage/htdocs";

/// テンプレート・出力ファイルのデフォルト名
pub const DEFAULT_PAGE_NAME: &str = "index.html";

/// 1サイクル分の設定
#[derive(Debug, Clone, PartialEq)]
pub struct CycleConfig {
    endpoints: Vec<Endpoint>,
    timeout: Duration,
    template_path: PathBuf,
    output_path: PathBuf,
}

impl CycleConfig {
    /// Build and validate a configuration.
    ///
    /// Rejects an empty endpoint list, non-http(s) or unparsable URLs,
    /// duplicate URLs and a zero timeout.
    pub fn new<I, S>(
        urls: I,
        timeout: Duration,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut endpoints = Vec::new();
        for url in urls {
            let url = url.into();
            validate_url(&url)?;
            if !seen.insert(url.clone()) {
                return Err(ConfigError::DuplicateEndpoint(url));
            }
            endpoints.push(Endpoint::new(url));
        }

        if endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            endpoints,
            timeout,
            template_path: template_path.into(),
            output_path: output_path.into(),
        })
    }

    /// Build a configuration from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(
            cli.urls.iter().cloned(),
            Duration::from_secs(cli.timeout_secs),
            cli.templates.join(&cli.template_name),
            cli.output_dir.join(&cli.output_name),
        )
    }

    /// 監視対象（設定順）
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// ポーリングのタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// テンプレートファイルのパス
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// 出力ファイルのパス
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
