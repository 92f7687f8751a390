//! エディタモジュール
//!
//! 一行を端末上でその場編集する機能

pub mod line_editor;
pub mod session;

// 公開API
pub use line_editor::{EditKey, KeyOutcome, LineEditor, Redraw};
pub use session::{edit_line, status_line, LineTerminal, ScreenUpdate};
