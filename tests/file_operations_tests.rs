use std::fs;

use lined::ui::MemoryConsole;
use lined::{App, EditorMode};
use tempfile::tempdir;

#[test]
fn test_open_missing_file_starts_empty() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("new.txt");

    let app = App::open(&path, MemoryConsole::new()).unwrap();
    assert!(app.buffer().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_save_without_edits_round_trips() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("round.txt");
    fs::write(&path, "first\n\n  indented\nlast").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    assert_eq!(app.execute_line("W"), EditorMode::Running);

    // 末尾の改行だけが正規化される
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\n\n  indented\nlast\n");
    assert_eq!(
        app.console().messages(),
        [format!("File: {} was written.", path.display())]
    );
}

#[test]
fn test_save_and_exit_writes_and_stops() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("exit.txt");

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input(["hello", "."]);
    app.execute_line("I");

    assert_eq!(app.execute_line("x"), EditorMode::Stopped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn test_save_failure_keeps_session_running() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing-dir").join("file.txt");

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    assert_eq!(app.execute_line("X"), EditorMode::Running);
    assert!(app.console().messages()[0].starts_with("ERROR:"));
}

#[test]
fn test_quit_does_not_write() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("untouched.txt");
    fs::write(&path, "original\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.execute_line("d");
    assert_eq!(app.execute_line("Q"), EditorMode::Stopped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
}

#[test]
fn test_insert_file_at_position() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    let other = temp_dir.path().join("other.txt");
    fs::write(&path, "a\nd\n").unwrap();
    fs::write(&other, "b\r\nc\r\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input([other.display().to_string()]);
    app.execute_line("1T");

    assert_eq!(app.buffer().lines(), ["a", "b", "c", "d"]);
}

#[test]
fn test_insert_missing_file_leaves_buffer() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    fs::write(&path, "a\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    let missing = temp_dir.path().join("nope.txt");
    app.console_mut().push_input([missing.display().to_string()]);

    assert_eq!(app.execute_line("5T"), EditorMode::Running);
    assert_eq!(app.buffer().lines(), ["a"]);
    assert!(app
        .console()
        .messages()
        .iter()
        .any(|message| message.starts_with("ERROR:") && message.contains("nope.txt")));
}

#[test]
fn test_insert_file_cancel() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    fs::write(&path, "a\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input(["."]);
    app.execute_line("T");
    assert_eq!(app.buffer().lines(), ["a"]);
}

#[test]
fn test_copy_range_to_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    let target = temp_dir.path().join("copy.txt");
    fs::write(&path, "zero\none\ntwo\nthree\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input([target.display().to_string()]);
    app.execute_line("1,9C");

    assert_eq!(fs::read_to_string(&target).unwrap(), "one\ntwo\nthree\n");
    assert_eq!(app.buffer().count(), 4);
}

#[test]
fn test_insert_file_at_huge_line_is_reported() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    let other = temp_dir.path().join("other.txt");
    fs::write(&path, "a\n").unwrap();
    fs::write(&other, "b\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input([other.display().to_string()]);

    assert_eq!(app.execute_line("18446744073709551615T"), EditorMode::Running);
    assert_eq!(app.buffer().lines(), ["a"]);
    assert!(app
        .console()
        .messages()
        .last()
        .is_some_and(|message| message.starts_with("ERROR:")));
}

#[test]
fn test_copy_to_file_cancel_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("main.txt");
    fs::write(&path, "a\nb\n").unwrap();

    let mut app = App::open(&path, MemoryConsole::new()).unwrap();
    app.console_mut().push_input(["."]);

    assert_eq!(app.execute_line("0,1C"), EditorMode::Running);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    assert_eq!(app.console().messages().len(), 1);
}
