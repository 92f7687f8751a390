//! コンソール入出力
//!
//! コマンドやプロンプトへの応答は一行ずつ読む。
//! 本文（一覧・印字）は標準出力、案内やエラーは標準エラーへ書く。

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::editor::{EditKey, LineTerminal, ScreenUpdate};
use crate::error::Result;

use super::terminal::CrosstermTerminal;

/// 操作が使う入出力
pub trait Console {
    /// 一行読む（入力終端なら `None`）
    fn read_line(&mut self) -> Result<Option<String>>;

    /// 本文の出力
    fn print(&mut self, text: &str);

    /// 案内・エラーの出力
    fn message(&mut self, text: &str);

    /// 改行なしのプロンプト
    fn prompt(&mut self, text: &str);

    /// 行内編集用の端末
    fn line_terminal(&mut self) -> &mut dyn LineTerminal;
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// 標準入出力を使うコンソール
#[derive(Debug, Default)]
pub struct StdConsole {
    terminal: CrosstermTerminal,
}

impl StdConsole {
    pub fn new(terminal: CrosstermTerminal) -> Self {
        Self { terminal }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(strip_newline(line)))
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(io::stdout(), "{}", text) {
            log::warn!("failed to write to stdout: {}", e);
        }
    }

    fn message(&mut self, text: &str) {
        if let Err(e) = writeln!(io::stderr(), "{}", text) {
            log::warn!("failed to write to stderr: {}", e);
        }
    }

    fn prompt(&mut self, text: &str) {
        let mut err = io::stderr();
        let _ = write!(err, "{}", text);
        let _ = err.flush();
    }

    fn line_terminal(&mut self) -> &mut dyn LineTerminal {
        &mut self.terminal
    }
}

/// 決められたキー列を返す端末
///
/// キーが尽きたら取り消しとして扱う
#[derive(Debug, Clone)]
pub struct ScriptedTerminal {
    keys: VecDeque<EditKey>,
    width: usize,
    updates: Vec<ScreenUpdate>,
    sessions: usize,
}

impl ScriptedTerminal {
    pub fn new(width: usize) -> Self {
        Self {
            keys: VecDeque::new(),
            width,
            updates: Vec::new(),
            sessions: 0,
        }
    }

    pub fn push_keys<I: IntoIterator<Item = EditKey>>(&mut self, keys: I) {
        self.keys.extend(keys);
    }

    /// これまでの画面更新
    pub fn updates(&self) -> &[ScreenUpdate] {
        &self.updates
    }

    /// 終了した編集セッション数
    pub fn sessions(&self) -> usize {
        self.sessions
    }
}

impl LineTerminal for ScriptedTerminal {
    fn visible_width(&self) -> usize {
        self.width
    }

    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_key(&mut self) -> Result<EditKey> {
        Ok(self.keys.pop_front().unwrap_or(EditKey::Cancel))
    }

    fn draw(&mut self, update: &ScreenUpdate) -> Result<()> {
        self.updates.push(update.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.sessions += 1;
        Ok(())
    }
}

/// メモリ上で完結するコンソール
///
/// 入力行を事前に積んでおき、出力を記録する。スクリプト実行やテストで使う。
#[derive(Debug, Clone)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    messages: Vec<String>,
    terminal: ScriptedTerminal,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::with_width(80)
    }

    /// 行内編集の表示幅を指定して作成
    pub fn with_width(width: usize) -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            messages: Vec::new(),
            terminal: ScriptedTerminal::new(width),
        }
    }

    /// 入力行を追加
    pub fn push_input<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.extend(lines.into_iter().map(Into::into));
    }

    /// 行内編集のキーを追加
    pub fn push_keys<I: IntoIterator<Item = EditKey>>(&mut self, keys: I) {
        self.terminal.push_keys(keys);
    }

    /// 本文出力
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// 案内・エラー出力（プロンプトは含まない）
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// 未消費の入力行数
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    pub fn terminal(&self) -> &ScriptedTerminal {
        &self.terminal
    }
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MemoryConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn prompt(&mut self, _text: &str) {}

    fn line_terminal(&mut self) -> &mut dyn LineTerminal {
        &mut self.terminal
    }
}
