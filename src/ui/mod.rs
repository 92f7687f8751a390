//! UIモジュール
//!
//! 行単位の入出力（コマンド・プロンプト）と、行内編集用の端末制御

pub mod console;
pub mod terminal;

// 公開API
pub use console::{Console, MemoryConsole, ScriptedTerminal, StdConsole};
pub use terminal::CrosstermTerminal;
