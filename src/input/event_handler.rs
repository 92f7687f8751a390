//! イベントハンドリング
//!
//! crossterm のキーイベントを `EditKey` に対応付ける

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::EditKey;
use crate::error::{Result, TerminalError};

/// キーイベントを変換する（押下以外は `None`）
pub fn map_key_event(key_event: KeyEvent) -> Option<EditKey> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match (key_event.code, key_event.modifiers) {
        // C-c: Escと同じく取り消し
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EditKey::Cancel,
        (KeyCode::Esc, _) => EditKey::Cancel,
        (KeyCode::Enter, _) => EditKey::Confirm,
        (KeyCode::Left, _) => EditKey::Left,
        (KeyCode::Right, _) => EditKey::Right,
        (KeyCode::Up, _) => EditKey::Up,
        (KeyCode::Down, _) => EditKey::Down,
        (KeyCode::Backspace, _) => EditKey::Backspace,
        (KeyCode::Delete, _) => EditKey::Delete,
        (KeyCode::Char(ch), modifiers) if is_plain(modifiers) => EditKey::Char(ch),
        _ => EditKey::Ignored,
    };

    Some(key)
}

/// 修飾キーなし、またはShiftのみ
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

/// 次のキー入力を待って読む
pub fn read_edit_key() -> Result<EditKey> {
    loop {
        let event = event::read().map_err(|e| TerminalError::Io {
            message: e.to_string(),
        })?;

        match event {
            Event::Key(key_event) => {
                if let Some(key) = map_key_event(key_event) {
                    return Ok(key);
                }
            }
            // マウス・リサイズ・ペーストは未サポート
            _ => continue,
        }
    }
}
