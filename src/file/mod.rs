//! ファイル操作モジュール
//!
//! - 起動時の読み込み（存在しないファイルは空バッファ）
//! - 保存は各行の後に改行を付けて上書き（一時ファイル経由にはしない）
//! - 挿入用の読み込みは存在しないファイルをエラーとして扱う

pub mod io;
pub mod path;

pub use io::{load_lines, normalize_content, read_lines, save_lines};
pub use path::expand_path;
