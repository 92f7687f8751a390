//! パス処理
//!
//! プロンプトで入力されたファイル名の `~` と環境変数を展開する

use std::path::PathBuf;

use crate::error::{FileError, Result};

/// `~` と `$VAR` を展開してパスに変換
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FileError::InvalidPath {
            path: input.to_string(),
        }
        .into());
    }

    let expanded = shellexpand::full(trimmed).map_err(|e| FileError::InvalidPath {
        path: format!("{}: {}", trimmed, e),
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}
