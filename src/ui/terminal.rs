//! crossterm による行内編集の描画
//!
//! 編集行の一つ上の行をステータス行として使う

use std::io::{self, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::config;
use crate::editor::{EditKey, LineTerminal, ScreenUpdate};
use crate::error::{Result, TerminalError};
use crate::input::read_edit_key;

fn terminal_error(error: io::Error) -> TerminalError {
    TerminalError::Io {
        message: error.to_string(),
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// 実端末
#[derive(Debug, Default)]
pub struct CrosstermTerminal {
    /// 表示幅の上書き値
    line_width: Option<u16>,
    /// 編集行の画面上の行番号
    row: u16,
    raw_mode: bool,
}

impl CrosstermTerminal {
    pub fn new(line_width: Option<u16>) -> Self {
        Self {
            line_width,
            row: 0,
            raw_mode: false,
        }
    }
}

impl LineTerminal for CrosstermTerminal {
    fn visible_width(&self) -> usize {
        let columns = terminal::size().map(|(columns, _)| columns).unwrap_or(80);
        config::visible_width(self.line_width, columns)
    }

    fn begin(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(|_| TerminalError::Unavailable)?;
        self.raw_mode = true;

        // ステータス行の分だけ一行進める
        let mut out = io::stdout();
        let positioned = execute!(out, Print("\r\n")).and_then(|_| cursor::position());
        match positioned {
            Ok((_, row)) => {
                self.row = row.max(1);
                Ok(())
            }
            Err(error) => {
                self.raw_mode = false;
                let _ = terminal::disable_raw_mode();
                Err(terminal_error(error).into())
            }
        }
    }

    fn read_key(&mut self) -> Result<EditKey> {
        read_edit_key()
    }

    fn draw(&mut self, update: &ScreenUpdate) -> Result<()> {
        let mut out = io::stdout();
        queue!(
            out,
            MoveTo(0, self.row - 1),
            Clear(ClearType::CurrentLine),
            Print(&update.status)
        )
        .map_err(terminal_error)?;

        if let Some(line) = &update.line {
            queue!(out, MoveTo(0, self.row), Print(line)).map_err(terminal_error)?;
        }

        queue!(out, MoveTo(to_u16(update.column), self.row)).map_err(terminal_error)?;
        out.flush().map_err(terminal_error)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut out = io::stdout();
        let printed = execute!(out, Print("\r\n")).map_err(terminal_error);

        if self.raw_mode {
            self.raw_mode = false;
            terminal::disable_raw_mode().map_err(terminal_error)?;
        }
        printed?;
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}
