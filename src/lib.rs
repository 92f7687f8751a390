//! lined - line-oriented text editor
//!
//! 一文字コマンドで操作する行エディタと、一行をその場で編集する行内エディタ

// コアモジュール
pub mod config;
pub mod error;
pub mod logging;

// データ層
pub mod buffer;
pub mod file;

// 編集層
pub mod editor;

// ロジック層
pub mod command;
pub mod input;

// 表示層
pub mod ui;

pub mod app;

// 公開API
pub use app::App;
pub use buffer::LineBuffer;
pub use command::{Command, CommandRegistry, EditorMode, Operation};
pub use config::EditorConfig;
pub use error::{LinedError, Result};
