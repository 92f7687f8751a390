//! コマンド文字と操作の対応表

use crate::error::LinedError;

use super::operations::{CommandContext, Operation};
use super::{Command, EditorMode};

/// 登録順を保持する対応表
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<(char, Operation)>,
}

impl CommandRegistry {
    /// 空の対応表
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 標準のコマンド文字をすべて登録した対応表
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();
        registry.register('L', Operation::List);
        registry.register('I', Operation::InsertBlock);
        registry.register('R', Operation::Replace);
        registry.register('F', Operation::Find);
        registry.register('C', Operation::CopyToFile);
        registry.register('P', Operation::Print);
        registry.register('D', Operation::Delete);
        registry.register('E', Operation::InteractiveEdit);
        registry.register('W', Operation::Save);
        registry.register('T', Operation::InsertFile);
        registry.register('H', Operation::Help);
        registry.register('X', Operation::SaveAndExit);
        registry.register('Q', Operation::Quit);
        registry
    }

    /// 文字に操作を割り当てる（既存の割り当ては置き換える）
    pub fn register(&mut self, letter: char, operation: Operation) {
        let letter = letter.to_ascii_uppercase();
        match self.entries.iter_mut().find(|(bound, _)| *bound == letter) {
            Some(entry) => entry.1 = operation,
            None => self.entries.push((letter, operation)),
        }
    }

    /// 文字に割り当てられた操作
    pub fn lookup(&self, letter: char) -> Option<Operation> {
        let letter = letter.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(bound, _)| *bound == letter)
            .map(|(_, operation)| *operation)
    }

    /// 登録済みの文字（登録順）
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(letter, _)| *letter)
    }

    /// コマンドを実行して次の状態を返す
    ///
    /// 該当する操作が無ければ `mode` をそのまま返す。
    /// 挿入位置を対象にする操作では、実行前に `count() >= last` となるよう空行で埋める。
    /// 埋められない位置ならエラーを表示して操作は実行しない。
    pub fn execute(
        &self,
        command: &Command,
        ctx: &mut CommandContext<'_>,
        mode: EditorMode,
    ) -> EditorMode {
        let Some(operation) = command.letter.and_then(|letter| self.lookup(letter)) else {
            log::debug!("no operation bound to {:?}", command.letter);
            return mode;
        };

        if operation.pads_target() {
            if let Err(error) = ctx.buffer.pad_to(command.last) {
                log::warn!("{} rejected: {}", operation.name(), error);
                ctx.console
                    .message(&format!("ERROR: {}", LinedError::from(error)));
                return EditorMode::Running;
            }
        }
        operation.apply(ctx, command.first, command.last)
    }
}
