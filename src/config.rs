//! 設定管理
//!
//! `<config_dir>/lined/config.json` から設定を読み込む。
//! ファイルが無ければ既定値を使い、壊れていればエラーを返す。

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, FileError, Result};
use crate::logging::LogLevel;

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "LINED_CONFIG";
/// ログレベルを上書きする環境変数
pub const LOG_LEVEL_ENV: &str = "LINED_LOG";

/// エディタ設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// コマンドプロンプト
    pub prompt: String,
    /// 行内編集の表示幅（未指定なら端末幅から算出）
    pub line_width: Option<u16>,
    /// ログレベル名
    pub log_level: String,
    /// ログファイル
    pub log_file: Option<PathBuf>,
    /// 起動時のタイトル表示
    pub show_banner: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            prompt: "*".to_string(),
            line_width: None,
            log_level: "info".to_string(),
            log_file: None,
            show_banner: true,
        }
    }
}

impl EditorConfig {
    /// 既定の設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("lined").join("config.json"))
    }

    /// 既定の場所から読み込む
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定ファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| FileError::from_io(&e, &path.display().to_string()))?;
        let config = Self::from_json(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        log::debug!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// JSON文字列から構築
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// 有効なログレベル（環境変数が優先）
    pub fn effective_log_level(&self) -> Result<LogLevel> {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(value) => LogLevel::parse(&value),
            Err(_) => LogLevel::parse(&self.log_level),
        }
    }
}

/// 表示幅の上書き値と端末幅から行内編集の幅を求める
///
/// 末尾の消去用空白が常に収まるよう、端末幅より1桁狭くする
pub fn visible_width(line_width: Option<u16>, terminal_columns: u16) -> usize {
    let width = match line_width {
        Some(width) => width,
        None => terminal_columns.saturating_sub(1),
    };
    usize::from(width.max(1))
}
