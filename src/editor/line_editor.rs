//! 行内編集の状態機械
//!
//! 一行分の文字列を固定幅の表示領域で編集する。
//! 端末への描画は行わず、各キーに対して必要な再描画の種類だけを返す。
//!
//! 常に `cursor == frame_start + column` が成り立ち、
//! `frame_start` はカーソルが表示領域からはみ出す時にだけ動く。

/// 行内編集で扱うキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Confirm,
    Cancel,
    Char(char),
    /// 割り当ての無いキー
    Ignored,
}

/// 必要な再描画
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// ステータス行とカーソル位置のみ
    Cursor,
    /// 表示中の部分文字列を描き直す
    Line,
}

/// キー処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Editing(Redraw),
    Commit,
    Cancel,
}

/// 行内編集のセッション状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    content: Vec<char>,
    /// 論理カーソル位置 `[0, len]`
    cursor: usize,
    /// 表示領域の先頭文字
    frame_start: usize,
    /// 画面上の列 `[0, width-1]`
    column: usize,
    /// 表示領域の幅
    width: usize,
}

impl LineEditor {
    /// 行頭にカーソルを置いて編集を開始
    pub fn new(text: &str, width: usize) -> Self {
        Self {
            content: text.chars().collect(),
            cursor: 0,
            frame_start: 0,
            column: 0,
            width: width.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn frame_start(&self) -> usize {
        self.frame_start
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// 編集中の内容
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// カーソル下の文字（行末では空白）
    pub fn char_under_cursor(&self) -> char {
        self.content.get(self.cursor).copied().unwrap_or(' ')
    }

    /// 実際に表示される文字数 `min(len - frame_start, width)`
    pub fn visible_width(&self) -> usize {
        (self.content.len() - self.frame_start).min(self.width)
    }

    /// 表示中の部分文字列
    pub fn visible_text(&self) -> String {
        let end = self.frame_start + self.visible_width();
        self.content[self.frame_start..end].iter().collect()
    }

    /// キーを一つ処理する
    pub fn handle_key(&mut self, key: EditKey) -> KeyOutcome {
        match key {
            EditKey::Cancel => KeyOutcome::Cancel,
            EditKey::Confirm => KeyOutcome::Commit,
            EditKey::Left => KeyOutcome::Editing(self.move_left()),
            EditKey::Right => KeyOutcome::Editing(self.move_right()),
            EditKey::Backspace => KeyOutcome::Editing(self.delete_backward()),
            EditKey::Delete => KeyOutcome::Editing(self.delete_forward()),
            EditKey::Char(ch) if !ch.is_control() => KeyOutcome::Editing(self.insert_char(ch)),
            EditKey::Char(_) | EditKey::Up | EditKey::Down | EditKey::Ignored => {
                KeyOutcome::Editing(Redraw::Cursor)
            }
        }
    }

    fn move_left(&mut self) -> Redraw {
        if self.cursor == 0 {
            return Redraw::Cursor;
        }
        self.cursor -= 1;
        self.retreat_column()
    }

    fn move_right(&mut self) -> Redraw {
        if self.cursor >= self.content.len() {
            return Redraw::Cursor;
        }
        self.cursor += 1;
        self.advance_column()
    }

    fn delete_backward(&mut self) -> Redraw {
        if self.cursor == 0 {
            return Redraw::Cursor;
        }
        self.content.remove(self.cursor - 1);
        self.cursor -= 1;
        self.retreat_column();
        Redraw::Line
    }

    fn delete_forward(&mut self) -> Redraw {
        if self.cursor >= self.content.len() {
            return Redraw::Cursor;
        }
        self.content.remove(self.cursor);
        Redraw::Line
    }

    fn insert_char(&mut self, ch: char) -> Redraw {
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
        self.advance_column();
        Redraw::Line
    }

    /// 左端に居れば表示領域を一文字左へずらす
    fn retreat_column(&mut self) -> Redraw {
        if self.column > 0 {
            self.column -= 1;
            Redraw::Cursor
        } else {
            self.frame_start -= 1;
            Redraw::Line
        }
    }

    /// 右端に居れば表示領域を一文字右へずらす
    fn advance_column(&mut self) -> Redraw {
        if self.column + 1 < self.width {
            self.column += 1;
            Redraw::Cursor
        } else {
            self.frame_start += 1;
            Redraw::Line
        }
    }
}
