//! テンプレートファイルの読み込み
//!
//! テンプレートの中身は不透明なテキストとしてレンダラーに渡す。

use crate::common::error::CycleError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// テンプレートファイルローダー
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    path: PathBuf,
}

impl TemplateLoader {
    /// 読み込み対象のパスを指定して作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// テンプレートファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// テンプレート名（ファイル名）
    ///
    /// 拡張子に応じた自動エスケープの判定にも使われる。
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// テンプレートを読み込む
    pub fn load(&self) -> Result<String, CycleError> {
        let metadata = fs::metadata(&self.path).map_err(|source| self.load_error(source))?;
        if metadata.is_dir() {
            return Err(self.load_error(io::Error::other(format!(
                "{} is a directory",
                self.path.display()
            ))));
        }

        let source = fs::read_to_string(&self.path).map_err(|source| self.load_error(source))?;
        debug!(path = %self.path.display(), bytes = source.len(), "Template loaded");
        Ok(source)
    }

    fn load_error(&self, source: io::Error) -> CycleError {
        CycleError::ConfigLoad {
            path: self.path.clone(),
            source,
        }
    }
}
