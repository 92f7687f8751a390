//! 行内編集セッション
//!
//! `LineEditor` の状態変化を `LineTerminal` へ画面更新として流す

use crate::error::Result;

use super::line_editor::{EditKey, KeyOutcome, LineEditor, Redraw};

/// 一回分の画面更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenUpdate {
    /// 編集行の上に表示するステータス行
    pub status: String,
    /// 描き直す表示文字列（末尾に消去用の空白を含む）
    pub line: Option<String>,
    /// 編集行上のカーソル列
    pub column: usize,
}

impl ScreenUpdate {
    fn from_editor(editor: &LineEditor, line_no: usize, redraw: Redraw) -> Self {
        let line = match redraw {
            Redraw::Line => Some(format!("{} ", editor.visible_text())),
            Redraw::Cursor => None,
        };

        Self {
            status: status_line(editor, line_no),
            line,
            column: editor.column(),
        }
    }
}

/// ステータス行の文字列
pub fn status_line(editor: &LineEditor, line_no: usize) -> String {
    format!(
        "Line: {} Col: {} Frame: {} Pos: {} Len: {} Char: '{}'",
        line_no,
        editor.column(),
        editor.frame_start(),
        editor.cursor(),
        editor.len(),
        editor.char_under_cursor()
    )
}

/// 行内編集が使う端末
pub trait LineTerminal {
    /// 編集に使える表示幅
    fn visible_width(&self) -> usize;

    /// 編集開始（rawモードへの切り替えなど）
    fn begin(&mut self) -> Result<()>;

    /// キーを一つ読む
    fn read_key(&mut self) -> Result<EditKey>;

    /// 画面更新を反映
    fn draw(&mut self, update: &ScreenUpdate) -> Result<()>;

    /// 編集終了（改行を出力して端末を戻す）
    fn finish(&mut self) -> Result<()>;
}

/// 一行を対話的に編集する
///
/// 確定なら `Some(新しい内容)`、取り消しなら `None`
pub fn edit_line(
    terminal: &mut dyn LineTerminal,
    line_no: usize,
    text: &str,
) -> Result<Option<String>> {
    let mut editor = LineEditor::new(text, terminal.visible_width());
    log::debug!(
        "editing line {} ({} chars, width {})",
        line_no,
        editor.len(),
        editor.width()
    );

    terminal.begin()?;
    let outcome = run_keys(terminal, &mut editor, line_no);
    let finished = terminal.finish();

    let committed = outcome?;
    finished?;

    Ok(committed.then(|| editor.text()))
}

fn run_keys(
    terminal: &mut dyn LineTerminal,
    editor: &mut LineEditor,
    line_no: usize,
) -> Result<bool> {
    terminal.draw(&ScreenUpdate::from_editor(editor, line_no, Redraw::Line))?;

    loop {
        let key = terminal.read_key()?;
        match editor.handle_key(key) {
            KeyOutcome::Commit => return Ok(true),
            KeyOutcome::Cancel => return Ok(false),
            KeyOutcome::Editing(redraw) => {
                terminal.draw(&ScreenUpdate::from_editor(editor, line_no, redraw))?;
            }
        }
    }
}
