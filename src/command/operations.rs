//! 編集操作
//!
//! 各操作は `(first, last)` の範囲とバッファに対して働き、次の実行状態を返す。
//! 範囲エラーやI/Oエラーはここでメッセージに変換され、呼び出し側へは伝播しない。

use std::path::Path;

use crate::buffer::LineBuffer;
use crate::editor::edit_line;
use crate::error::{LinedError, Result};
use crate::file::{expand_path, read_lines, save_lines};
use crate::ui::Console;

use super::help::HELP;
use super::{EditorMode, CANCEL_SENTINEL};

/// 操作が受け取る文脈
pub struct CommandContext<'a> {
    pub buffer: &'a mut LineBuffer,
    pub filename: &'a Path,
    pub console: &'a mut dyn Console,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        buffer: &'a mut LineBuffer,
        filename: &'a Path,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            buffer,
            filename,
            console,
        }
    }

    /// プロンプトへの応答を読む。取り消し・入力終端は `None`
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.console.message(question);
        let answer = self.console.read_line()?;
        Ok(answer.filter(|answer| answer != CANCEL_SENTINEL))
    }
}

/// 編集操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Print,
    Find,
    Replace,
    InsertBlock,
    InsertFile,
    Delete,
    Save,
    SaveAndExit,
    Quit,
    CopyToFile,
    Help,
    InteractiveEdit,
}

impl Operation {
    /// ログ用の名前
    pub fn name(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Print => "print",
            Operation::Find => "find",
            Operation::Replace => "replace",
            Operation::InsertBlock => "insert-block",
            Operation::InsertFile => "insert-file",
            Operation::Delete => "delete",
            Operation::Save => "save",
            Operation::SaveAndExit => "save-and-exit",
            Operation::Quit => "quit",
            Operation::CopyToFile => "copy-to-file",
            Operation::Help => "help",
            Operation::InteractiveEdit => "interactive-edit",
        }
    }

    /// 実行前に挿入位置まで空行で埋める操作か
    ///
    /// 挿入ファイルは読み込み成功後に自分で埋めるので含めない
    pub fn pads_target(self) -> bool {
        matches!(self, Operation::InsertBlock | Operation::InteractiveEdit)
    }

    /// 操作を実行する
    ///
    /// エラーはメッセージとして表示し、セッションは継続する
    pub fn apply(self, ctx: &mut CommandContext<'_>, first: usize, last: usize) -> EditorMode {
        log::debug!("{} {}..={}", self.name(), first, last);

        match self.run(ctx, first, last) {
            Ok(mode) => mode,
            Err(error) => {
                log::warn!("{} failed: {}", self.name(), error);
                ctx.console.message(&format!("ERROR: {}", error));
                EditorMode::Running
            }
        }
    }

    fn run(self, ctx: &mut CommandContext<'_>, first: usize, last: usize) -> Result<EditorMode> {
        match self {
            Operation::List => list(ctx, first, last),
            Operation::Print => print(ctx, first, last),
            Operation::Find => find(ctx, first, last)?,
            Operation::Replace => replace(ctx, first, last)?,
            Operation::InsertBlock => insert_block(ctx, last)?,
            Operation::InsertFile => insert_file(ctx, last)?,
            Operation::Delete => delete(ctx, first, last)?,
            Operation::Save => {
                save(ctx)?;
                ctx.console
                    .message(&format!("File: {} was written.", ctx.filename.display()));
            }
            Operation::SaveAndExit => {
                save(ctx)?;
                ctx.console
                    .message(&format!("File: {} was saved. Bye", ctx.filename.display()));
                return Ok(EditorMode::Stopped);
            }
            Operation::Quit => {
                ctx.console.message(&format!(
                    "No changes made to file: {}. Bye",
                    ctx.filename.display()
                ));
                return Ok(EditorMode::Stopped);
            }
            Operation::CopyToFile => copy_to_file(ctx, first, last)?,
            Operation::Help => ctx.console.print(HELP),
            Operation::InteractiveEdit => interactive_edit(ctx, last)?,
        }

        Ok(EditorMode::Running)
    }
}

/// `[first, min(last, count-1)]` の行
fn lines_in_range(
    buffer: &LineBuffer,
    first: usize,
    last: usize,
) -> impl Iterator<Item = (usize, &String)> {
    buffer
        .lines()
        .iter()
        .enumerate()
        .skip(first)
        .take_while(move |(index, _)| *index <= last)
}

fn list(ctx: &mut CommandContext<'_>, first: usize, last: usize) {
    if first >= ctx.buffer.count() {
        ctx.console
            .message("ERROR: First line exceeds number of lines");
    }

    for (index, line) in lines_in_range(ctx.buffer, first, last) {
        ctx.console.print(&format!("{}:{}", index, line));
    }
}

fn print(ctx: &mut CommandContext<'_>, first: usize, last: usize) {
    for (_, line) in lines_in_range(ctx.buffer, first, last) {
        ctx.console.print(line);
    }
}

fn find(ctx: &mut CommandContext<'_>, first: usize, last: usize) -> Result<()> {
    let Some(needle) = ctx.ask("Enter text to find or dot to cancel")? else {
        return Ok(());
    };

    let found: Vec<String> = lines_in_range(ctx.buffer, first, last)
        .filter(|(_, line)| line.contains(needle.as_str()))
        .map(|(index, line)| format!("{}:{}", index, line))
        .collect();

    for line in &found {
        ctx.console.message(line);
    }
    log::debug!("find {:?}: {} matches", needle, found.len());
    Ok(())
}

fn replace(ctx: &mut CommandContext<'_>, first: usize, last: usize) -> Result<()> {
    let Some(search) = ctx.ask("Enter text to be replaced or dot to cancel")? else {
        return Ok(());
    };
    if search.is_empty() {
        return Err(LinedError::Application(
            "Text to be replaced must not be empty".to_string(),
        ));
    }

    ctx.console.message("Enter text replacing previous string");
    let Some(replacement) = ctx.console.read_line()? else {
        return Ok(());
    };

    let Some(end) = ctx.buffer.clamp_last(last) else {
        return Ok(());
    };
    let mut changed = 0;
    for index in first..=end {
        let line = ctx.buffer.get(index)?;
        if line.contains(search.as_str()) {
            let updated = line.replace(search.as_str(), &replacement);
            ctx.buffer.set(index, updated)?;
            changed += 1;
        }
    }

    log::info!("replaced {:?} with {:?} in {} lines", search, replacement, changed);
    Ok(())
}

fn insert_block(ctx: &mut CommandContext<'_>, at: usize) -> Result<()> {
    ctx.console.message(&format!(
        "Appending at line {}...End text with dot only!",
        at
    ));

    let mut collected = Vec::new();
    loop {
        ctx.console.prompt(":");
        match ctx.console.read_line()? {
            Some(line) if line == CANCEL_SENTINEL => break,
            Some(line) => collected.push(line),
            None => break,
        }
    }

    ctx.buffer.pad_to(at)?;
    let inserted = collected.len();
    ctx.buffer.insert_range(at, collected)?;
    log::info!("inserted {} lines at {}", inserted, at);
    Ok(())
}

fn insert_file(ctx: &mut CommandContext<'_>, at: usize) -> Result<()> {
    let question = format!("Enter filename to insert at line {} or dot to cancel!", at);
    let Some(name) = ctx.ask(&question)? else {
        return Ok(());
    };

    // 読み込みに失敗した場合はバッファに触れない
    let path = expand_path(&name)?;
    let lines = read_lines(&path)?;

    ctx.buffer.pad_to(at)?;
    let inserted = lines.len();
    ctx.buffer.insert_range(at, lines)?;
    ctx.console.message(&format!(
        "{} lines from {} were inserted at line {}",
        inserted,
        path.display(),
        at
    ));
    Ok(())
}

fn delete(ctx: &mut CommandContext<'_>, first: usize, last: usize) -> Result<()> {
    let count = ctx.buffer.count();

    if first == last {
        if first < count {
            ctx.buffer.remove_range(first, 1)?;
            ctx.console.message(&format!("Line {} was deleted!", first));
        } else {
            ctx.console.message(&format!(
                "ERROR: There is no {} line in text to delete",
                first
            ));
        }
        return Ok(());
    }

    // 範囲は両端を含み、末尾を越える分は切り詰める
    match ctx.buffer.clamp_last(last) {
        Some(end) if first <= end => {
            ctx.buffer.remove_range(first, end - first + 1)?;
            ctx.console
                .message(&format!("Lines from {} to {} were deleted!", first, end));
        }
        _ => {
            ctx.console.message(&format!(
                "ERROR: Lines after {} can't be deleted",
                count.saturating_sub(1)
            ));
        }
    }
    Ok(())
}

fn save(ctx: &mut CommandContext<'_>) -> Result<()> {
    save_lines(ctx.filename, ctx.buffer.lines())
}

fn copy_to_file(ctx: &mut CommandContext<'_>, first: usize, last: usize) -> Result<()> {
    let question = format!(
        "Enter filename to save lines from {} to {} or dot to cancel!",
        first, last
    );
    let Some(name) = ctx.ask(&question)? else {
        return Ok(());
    };

    let path = expand_path(&name)?;
    let lines: Vec<&String> = lines_in_range(ctx.buffer, first, last)
        .map(|(_, line)| line)
        .collect();
    save_lines(&path, &lines)?;

    ctx.console.message(&format!(
        "Lines from {} to {} were written to {}!",
        first,
        last,
        path.display()
    ));
    Ok(())
}

fn interactive_edit(ctx: &mut CommandContext<'_>, target: usize) -> Result<()> {
    // 対象行が必ず存在するよう空行で埋める
    ctx.buffer.pad_to(target.saturating_add(1))?;
    let original = ctx.buffer.get(target)?.to_string();

    match edit_line(ctx.console.line_terminal(), target, &original)? {
        Some(edited) => {
            log::info!("line {} edited", target);
            ctx.buffer.set(target, edited)?;
        }
        None => log::debug!("edit of line {} cancelled", target),
    }
    Ok(())
}
