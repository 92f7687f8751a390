//! コマンド行の解析
//!
//! `1,6L` / `6D` / `L` / `L1,6` のような入力を
//! コマンド文字と行番号の組に分解する

use std::sync::OnceLock;

use regex::Regex;

use super::Command;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?P<number>\d+)|(?P<letter>[A-Z])").expect("command token pattern is valid")
    })
}

/// 入力行を解析する
///
/// * 最初の数値は `first` と `last` の両方に入る
/// * 二つ目の数値は `last` に入り、三つ目以降は無視する
/// * 数値として解釈できないトークンは既定値を変えない
/// * 最初の英字がコマンド文字になる
pub fn parse_command(input: &str, line_count: usize) -> Command {
    let upper = input.to_ascii_uppercase();
    let mut command = Command::empty(line_count);
    let mut numbers_seen = 0;

    for captures in token_pattern().captures_iter(&upper) {
        if let Some(letter) = captures.name("letter") {
            if command.letter.is_none() {
                command.letter = letter.as_str().chars().next();
            }
            continue;
        }

        let Some(number) = captures.name("number") else {
            continue;
        };
        let Ok(value) = number.as_str().parse::<usize>() else {
            log::debug!("ignoring numeric token {:?}", number.as_str());
            continue;
        };

        match numbers_seen {
            0 => {
                command.first = value;
                command.last = value;
            }
            1 => command.last = value,
            _ => {}
        }
        numbers_seen += 1;
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_only_uses_whole_buffer() {
        assert_eq!(parse_command("l", 5), Command::new('L', 0, 5));
    }

    #[test]
    fn test_range_before_letter() {
        assert_eq!(parse_command("1,6L", 10), Command::new('L', 1, 6));
        assert_eq!(parse_command("6D", 10), Command::new('D', 6, 6));
    }

    #[test]
    fn test_range_after_letter() {
        assert_eq!(parse_command("p2,3", 10), Command::new('P', 2, 3));
    }

    #[test]
    fn test_blank_input_has_no_letter() {
        let command = parse_command("   ", 4);
        assert_eq!(command.letter, None);
        assert_eq!((command.first, command.last), (0, 4));
    }

    #[test]
    fn test_overflowing_number_keeps_default() {
        let command = parse_command("99999999999999999999999999L", 3);
        assert_eq!(command, Command::new('L', 0, 3));
    }

    #[test]
    fn test_first_letter_wins_and_extra_numbers_ignored() {
        assert_eq!(parse_command("1,2,3DX", 9), Command::new('D', 1, 2));
    }

    #[test]
    fn test_negative_sign_is_not_part_of_number() {
        assert_eq!(parse_command("-1L", 3), Command::new('L', 1, 1));
    }
}
