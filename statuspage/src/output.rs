//! 出力ファイルの書き出し
//!
//! 公開先と同じディレクトリの`<公開先>.new`に全内容を書き込み、
//! 成功した場合のみ`rename`で公開先を置き換える。
//! 読み手が書きかけのファイルを目にすることはない。

use crate::common::error::CycleError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 一時ファイルのサフィックス
pub const TEMP_SUFFIX: &str = ".new";

/// 出力ライター
#[derive(Debug, Clone)]
pub struct OutputWriter {
    destination: PathBuf,
}

impl OutputWriter {
    /// 公開先パスを指定して作成
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// 公開先パス
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// 一時ファイルのパス（公開先 + `.new`）
    pub fn temp_path(&self) -> PathBuf {
        let mut path = self.destination.clone().into_os_string();
        path.push(TEMP_SUFFIX);
        PathBuf::from(path)
    }

    /// バイト列を公開先へアトミックに書き出す
    ///
    /// - オープン失敗: `Open`
    /// - 書き込み失敗: 一時ファイルを削除してから`Write`
    /// - リネーム失敗: 一時ファイルは調査用に残して`Rename`
    pub fn publish(&self, bytes: &[u8]) -> Result<(), CycleError> {
        let temp = self.temp_path();

        debug!(path = %temp.display(), "Opening output file");
        let mut file = open_temp(&temp).map_err(|source| CycleError::Open {
            path: temp.clone(),
            source,
        })?;

        debug!(path = %temp.display(), bytes = bytes.len(), "Writing output file");
        if let Err(source) = write_fully(&mut file, bytes) {
            drop(file);
            if let Err(e) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %e, "Failed to remove temporary output file");
            }
            return Err(CycleError::Write { path: temp, source });
        }
        drop(file);

        debug!(
            from = %temp.display(),
            to = %self.destination.display(),
            "Renaming output file"
        );
        fs::rename(&temp, &self.destination).map_err(|source| CycleError::Rename {
            from: temp.clone(),
            to: self.destination.clone(),
            source,
        })?;

        sync_parent_dir(&self.destination);

        info!(
            path = %self.destination.display(),
            bytes = bytes.len(),
            "Output published"
        );
        Ok(())
    }
}

fn open_temp(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

fn write_fully(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.sync_all()
}

/// リネーム結果をディスクに反映させる（失敗しても致命的ではない）
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Err(e) = File::open(parent).and_then(|dir| dir.sync_all()) {
        debug!(path = %parent.display(), error = %e, "Failed to sync output directory");
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}
