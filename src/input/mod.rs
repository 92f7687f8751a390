//! 入力処理モジュール
//!
//! 端末のキーイベントを行内編集のキーへ変換する

pub mod event_handler;

pub use event_handler::{map_key_event, read_edit_key};
