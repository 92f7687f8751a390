//! コマンドシステム
//!
//! 入力行の解析、コマンド文字と操作の対応表、各操作の実装

pub mod help;
pub mod operations;
pub mod parser;
pub mod registry;

pub use operations::{CommandContext, Operation};
pub use parser::parse_command;
pub use registry::CommandRegistry;

/// サブプロンプトの取り消しを表す入力
pub const CANCEL_SENTINEL: &str = ".";

/// エディタの実行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Running,
    Stopped,
}

impl EditorMode {
    pub fn is_running(self) -> bool {
        self == EditorMode::Running
    }
}

/// 解析済みのコマンド
///
/// `first` / `last` はどちらも0始まりで両端を含む。
/// 未指定時は `first = 0`, `last = 行数`（末尾の一つ先）になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// 大文字に正規化されたコマンド文字（無ければ何もしない）
    pub letter: Option<char>,
    pub first: usize,
    pub last: usize,
}

impl Command {
    pub fn new(letter: char, first: usize, last: usize) -> Self {
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            first,
            last,
        }
    }

    /// コマンド文字を含まない入力
    pub fn empty(line_count: usize) -> Self {
        Self {
            letter: None,
            first: 0,
            last: line_count,
        }
    }
}
