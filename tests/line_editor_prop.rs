//! Property tests for the in-place line editor and the line buffer.
//!
//! Only the public API is exercised so the cursor/viewport invariant holds for
//! any key sequence a terminal can deliver.

use lined::editor::{EditKey, KeyOutcome, LineEditor};
use lined::ui::MemoryConsole;
use lined::{App, LineBuffer};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn edit_key_strategy() -> impl Strategy<Value = EditKey> {
    prop_oneof![
        Just(EditKey::Left),
        Just(EditKey::Right),
        Just(EditKey::Up),
        Just(EditKey::Down),
        Just(EditKey::Backspace),
        Just(EditKey::Delete),
        proptest::char::range('a', 'z').prop_map(EditKey::Char),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    "[a-z .]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn cursor_stays_inside_viewport(
        initial in line_strategy(),
        width in 1usize..12,
        keys in proptest::collection::vec(edit_key_strategy(), 0..80)
    ) {
        let mut editor = LineEditor::new(&initial, width);
        let mut model: Vec<char> = initial.chars().collect();
        let mut cursor = 0usize;

        for key in keys {
            let outcome = editor.handle_key(key);
            prop_assert!(matches!(outcome, KeyOutcome::Editing(_)));

            match key {
                EditKey::Left if cursor > 0 => cursor -= 1,
                EditKey::Right if cursor < model.len() => cursor += 1,
                EditKey::Backspace if cursor > 0 => {
                    model.remove(cursor - 1);
                    cursor -= 1;
                }
                EditKey::Delete if cursor < model.len() => {
                    model.remove(cursor);
                }
                EditKey::Char(ch) => {
                    model.insert(cursor, ch);
                    cursor += 1;
                }
                _ => {}
            }

            prop_assert_eq!(editor.cursor(), editor.frame_start() + editor.column());
            prop_assert!(editor.column() < editor.width());
            prop_assert!(editor.cursor() <= editor.len());
            prop_assert!(editor.visible_width() <= width);
            prop_assert_eq!(editor.cursor(), cursor);
        }

        prop_assert_eq!(editor.text(), model.into_iter().collect::<String>());
    }

    #[test]
    fn set_then_get_returns_text(
        lines in proptest::collection::vec(line_strategy(), 1..20),
        index in 0usize..20,
        text in line_strategy()
    ) {
        let mut buffer = LineBuffer::from_lines(lines.clone());
        let index = index % lines.len();

        buffer.set(index, text.clone()).unwrap();
        prop_assert_eq!(buffer.get(index).unwrap(), text.as_str());
        prop_assert_eq!(buffer.count(), lines.len());
    }

    #[test]
    fn range_delete_never_passes_end(
        lines in proptest::collection::vec(line_strategy(), 0..15),
        first in 0usize..20,
        span in 1usize..20
    ) {
        let count = lines.len();
        let last = first + span;
        let mut app = App::with_buffer("p.txt", LineBuffer::from_lines(lines.clone()), MemoryConsole::new());

        app.execute_line(&format!("{},{}D", first, last));

        if first < count {
            let end = last.min(count - 1);
            let mut expected = lines.clone();
            expected.drain(first..=end);
            prop_assert_eq!(app.buffer().lines(), expected.as_slice());
        } else {
            prop_assert_eq!(app.buffer().lines(), lines.as_slice());
        }
    }

    #[test]
    fn insert_block_pads_with_empty_lines(
        lines in proptest::collection::vec(line_strategy(), 0..6),
        at in 0usize..12,
        block in proptest::collection::vec("[a-z]{1,8}", 1..5)
    ) {
        let n = lines.len();
        let mut console = MemoryConsole::new();
        console.push_input(block.iter().cloned());
        console.push_input(["."]);
        let mut app = App::with_buffer("p.txt", LineBuffer::from_lines(lines), console);

        app.execute_line(&format!("{}I", at));

        let buffer = app.buffer();
        prop_assert!(buffer.count() >= at + block.len());
        for index in n..at {
            prop_assert_eq!(buffer.get(index).unwrap(), "");
        }
        for (offset, line) in block.iter().enumerate() {
            prop_assert_eq!(buffer.get(at + offset).unwrap(), line.as_str());
        }
    }
}
