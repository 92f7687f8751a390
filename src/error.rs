//! エラーハンドリングシステム
//!
//! lined 全体で使用される統一されたエラー型とユーティリティを定義
//! 範囲エラー・I/Oエラーは各操作の境界でメッセージに変換され、セッションは継続する

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum LinedError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// バッファ操作エラー
    #[error("Buffer operation failed: {0}")]
    Buffer(#[from] BufferError),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 端末操作エラー
    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// バッファ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Line {index} is out of range (buffer has {len} lines)")]
    OutOfRange { index: usize, len: usize },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// 端末操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum TerminalError {
    #[error("Terminal is not available")]
    Unavailable,

    #[error("Terminal IO error: {message}")]
    Io { message: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, LinedError>;

/// 各モジュール固有のResult型
pub mod buffer {
    pub type Result<T> = std::result::Result<T, super::BufferError>;
}

impl FileError {
    /// パス付きでI/Oエラーを分類
    pub fn from_io(error: &std::io::Error, path: &str) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            std::io::ErrorKind::InvalidData => FileError::Encoding {
                message: format!("{}: {}", path, error),
            },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

// std::io::Error から LinedError への変換
// パスが分からないので、分類できる種類はエラー文をパスの代わりに使う
impl From<std::io::Error> for LinedError {
    fn from(error: std::io::Error) -> Self {
        let file_error = match error.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                FileError::from_io(&error, &error.to_string())
            }
            _ => FileError::Io {
                message: error.to_string(),
            },
        };
        LinedError::File(file_error)
    }
}

/// パニックハンドラの設定
///
/// rawモードのまま終了すると端末が壊れるため、出力前に必ず復帰させる
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();

        let (file, line) = panic_info
            .location()
            .map(|location| (location.file(), location.line()))
            .unwrap_or(("<unknown>", 0));

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("panic at {}:{}: {}", file, line, message);
        eprintln!("PANIC at {}:{}: {}", file, line, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let error: LinedError = io_error.into();

        assert!(matches!(error, LinedError::File(FileError::Io { .. })));

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: LinedError = io_error.into();
        assert!(matches!(error, LinedError::File(FileError::NotFound { .. })));

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: LinedError = io_error.into();
        assert!(matches!(
            error,
            LinedError::File(FileError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_from_io_keeps_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = FileError::from_io(&io_error, "/etc/shadow");

        assert_eq!(
            error,
            FileError::PermissionDenied {
                path: "/etc/shadow".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let error = LinedError::from(BufferError::OutOfRange { index: 7, len: 3 });
        assert!(error.to_string().contains("Line 7 is out of range"));
    }
}
