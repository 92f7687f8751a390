//! バッファ管理モジュール
//!
//! 編集中のテキストを行の並びとして保持する。
//! 行番号は0始まりで、欠けた行は常に空文字列として表現される。

use crate::error::buffer::Result;
use crate::error::BufferError;

/// 一度の操作で末尾に追加できる空行数の上限
pub const MAX_PADDING: usize = 100_000;

/// 行単位のテキストバッファ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 行の並びからバッファを作成
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// 行数
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 全行への参照
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 指定行を取得
    pub fn get(&self, index: usize) -> Result<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(self.out_of_range(index))
    }

    /// 指定行を置き換え
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let error = self.out_of_range(index);
        let line = self.lines.get_mut(index).ok_or(error)?;
        *line = text.into();
        Ok(())
    }

    /// `at` の位置に複数行を挿入（`at == count()` は末尾追加）
    pub fn insert_range<I, S>(&mut self, at: usize, texts: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if at > self.lines.len() {
            return Err(self.out_of_range(at));
        }
        self.lines.splice(at..at, texts.into_iter().map(Into::into));
        Ok(())
    }

    /// `at` から `count` 行を削除
    pub fn remove_range(&mut self, at: usize, count: usize) -> Result<()> {
        let end = at
            .checked_add(count)
            .filter(|end| *end <= self.lines.len())
            .ok_or(self.out_of_range(at.saturating_add(count).saturating_sub(1)))?;
        self.lines.drain(at..end);
        Ok(())
    }

    /// `count() >= n` になるまで空行を追加
    ///
    /// 追加が `MAX_PADDING` 行を超える場合は何もせず範囲エラー
    pub fn pad_to(&mut self, n: usize) -> Result<()> {
        if n > self.lines.len().saturating_add(MAX_PADDING) {
            return Err(self.out_of_range(n));
        }
        if self.lines.len() < n {
            self.lines.resize(n, String::new());
        }
        Ok(())
    }

    /// 範囲の実効上限 `min(last, count-1)`。空バッファでは `None`
    pub fn clamp_last(&self, last: usize) -> Option<usize> {
        self.lines.len().checked_sub(1).map(|max| last.min(max))
    }

    fn out_of_range(&self, index: usize) -> BufferError {
        BufferError::OutOfRange {
            index,
            len: self.lines.len(),
        }
    }
}
