//! ファイルI/O操作
//!
//! UTF-8テキストファイルを行の並びとして読み書きする

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{FileError, Result};

/// BOM除去と改行コードのLF統一
pub fn normalize_content(content: &str) -> String {
    let without_bom = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    without_bom.replace("\r\n", "\n").replace('\r', "\n")
}

fn split_lines(content: &str) -> Vec<String> {
    // 末尾の改行は空の最終行として扱わない
    normalize_content(content)
        .lines()
        .map(str::to_string)
        .collect()
}

fn read_content(path: &Path) -> Result<String> {
    let display = path.display().to_string();

    if path.is_dir() {
        return Err(FileError::InvalidPath { path: display }.into());
    }

    fs::read_to_string(path).map_err(|e| FileError::from_io(&e, &display).into())
}

/// 起動時の読み込み。存在しないファイルは空として扱う
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        log::info!("{} does not exist, starting with an empty buffer", path.display());
        return Ok(Vec::new());
    }

    let lines = split_lines(&read_content(path)?);
    log::info!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// 挿入用の読み込み。存在しないファイルはエラー
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let lines = split_lines(&read_content(path)?);
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// 各行の後に改行を付けて上書き保存
pub fn save_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let display = path.display().to_string();
    let io_error = |e: std::io::Error| FileError::from_io(&e, &display);

    let file = fs::File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    log::info!("wrote {} lines to {}", lines.len(), display);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let lines = load_lines(&temp_dir.path().join("new.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let result = read_lines(&temp_dir.path().join("missing.txt"));
        assert!(matches!(
            result,
            Err(crate::error::LinedError::File(FileError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_trailing_newline_is_not_a_line() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("lines.txt");
        fs::write(&path, "one\ntwo\n").unwrap();

        assert_eq!(load_lines(&path).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_crlf_and_bom_are_normalized() {
        assert_eq!(normalize_content("\u{FEFF}a\r\nb\rc"), "a\nb\nc");

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("dos.txt");
        fs::write(&path, "\u{FEFF}first\r\nsecond\r\n").unwrap();
        assert_eq!(load_lines(&path).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_save_writes_newline_after_each_line() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");

        save_lines(&path, &["a", "", "c"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n\nc\n");

        save_lines::<String>(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("no").join("such").join("dir.txt");
        assert!(save_lines(&path, &["x"]).is_err());
    }
}
