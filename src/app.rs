//! メインアプリケーション構造体
//!
//! プロンプトを表示してコマンドを一行ずつ読み、停止状態になるまで実行する

use std::path::{Path, PathBuf};

use crate::buffer::LineBuffer;
use crate::command::{parse_command, CommandContext, CommandRegistry, EditorMode, Operation};
use crate::error::Result;
use crate::file::load_lines;
use crate::ui::Console;

/// メインアプリケーション構造体
pub struct App<C: Console> {
    buffer: LineBuffer,
    filename: PathBuf,
    registry: CommandRegistry,
    console: C,
    prompt: String,
    mode: EditorMode,
}

impl<C: Console> App<C> {
    /// ファイルを読み込んで起動（存在しなければ空のバッファ）
    pub fn open(filename: impl Into<PathBuf>, console: C) -> Result<Self> {
        let filename = filename.into();
        let lines = load_lines(&filename)?;
        Ok(Self::with_buffer(filename, LineBuffer::from_lines(lines), console))
    }

    /// 既存のバッファで起動
    pub fn with_buffer(filename: impl Into<PathBuf>, buffer: LineBuffer, console: C) -> Self {
        Self {
            buffer,
            filename: filename.into(),
            registry: CommandRegistry::with_default_commands(),
            console,
            prompt: "*".to_string(),
            mode: EditorMode::Running,
        }
    }

    /// コマンドプロンプトを変更
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// 停止するまでコマンドを処理する
    pub fn run(&mut self) -> Result<()> {
        log::info!("editing {}", self.filename.display());

        while self.mode.is_running() {
            self.console.prompt(&self.prompt);
            match self.console.read_line()? {
                // 入力終端は保存せずに終了
                None => {
                    self.console.message("");
                    self.mode = self.apply(Operation::Quit);
                }
                Some(line) if line.is_empty() => continue,
                Some(line) => {
                    self.execute_line(&line);
                }
            }
        }

        log::info!("session finished");
        Ok(())
    }

    /// 一行分のコマンドを実行する
    pub fn execute_line(&mut self, input: &str) -> EditorMode {
        let command = parse_command(input, self.buffer.count());
        let mut ctx = CommandContext::new(&mut self.buffer, &self.filename, &mut self.console);
        self.mode = self.registry.execute(&command, &mut ctx, self.mode);
        self.mode
    }

    fn apply(&mut self, operation: Operation) -> EditorMode {
        let last = self.buffer.count();
        let mut ctx = CommandContext::new(&mut self.buffer, &self.filename, &mut self.console);
        operation.apply(&mut ctx, 0, last)
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// アプリケーションが実行中かどうか
    pub fn is_running(&self) -> bool {
        self.mode.is_running()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }
}
