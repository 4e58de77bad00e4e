//! ステータスページのレンダリング
//!
//! テンプレートエンジンにはminijinjaを使う。未定義フィールドの参照は
//! 実行時エラーとして扱い、構文エラーとは区別して返す。

/// テンプレートファイルの読み込み
pub mod loader;

pub use loader::TemplateLoader;

use crate::common::error::CycleError;
use crate::types::poll::RenderContext;
use minijinja::{Environment, UndefinedBehavior};
use tracing::debug;

/// ページレンダラー
///
/// I/Oは行わず、テンプレート文字列とコンテキストからバイト列を作るだけ。
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// 新しいレンダラーを作成
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    /// テンプレートをレンダリング
    ///
    /// `name`の拡張子が`.html`ならHTMLエスケープが有効になる。
    pub fn render(
        &self,
        name: &str,
        source: &str,
        context: &RenderContext,
    ) -> Result<Vec<u8>, CycleError> {
        let template = self
            .env
            .template_from_named_str(name, source)
            .map_err(|source| CycleError::TemplateParse {
                name: name.to_string(),
                source,
            })?;
        debug!(template = name, "Template parsed");

        let output = template
            .render(context)
            .map_err(|source| CycleError::TemplateExecution {
                name: name.to_string(),
                source,
            })?;

        Ok(output.into_bytes())
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}
