//! 起動時の表示とヘルプテキスト

pub const TITLE: &str = "lined - line editor";
pub const LICENSE: &str = "MIT License";

pub const HELP: &str = "Usage:

lined <filename.txt> - open filename.txt for editing

Command mode - every command must be accepted with Enter key.
Some commands ask for additional data (filename or string).

H - displays help;
L - lists lines of text;
P - displays lines without line numbers;
F - lists lines containing given string;
I - inserts new lines of text;
E - edits a single line in place;
D - deletes lines of text;
R - replaces first given string with second given string;
T - inserts another text file;
C - copies lines to another file;

W - (writes) saves the file;
X - saves the file and exits;
Q - quits lined without saving.

Commands L,P,F,D,R,I,E,C accept line numbers:

For example:

1,6L - lists lines 1-6 of the text;
6I - inserts new lines before line 6;
6E - edits line 6 (arrows move, Enter accepts, Esc cancels);
6D - deletes line 6;
1,6D - deletes lines from 1 to 6.

Answer any prompt with a single period to cancel it.
If you want to write a single period in a line, type it twice
and replace it with one period using the R command.
";

/// 起動時に表示するタイトル行
pub fn banner() -> String {
    format!(
        "{} {}\n{}",
        TITLE,
        env!("CARGO_PKG_VERSION"),
        LICENSE
    )
}
