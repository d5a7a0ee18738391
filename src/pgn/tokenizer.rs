//! Movetext tokenizer.
//!
//! Strips everything that is not a move from PGN movetext and yields the
//! moves one at a time, so a caller that only needs the first N plies never
//! scans the rest of the game.
//!
//! ## What gets discarded
//! - `[Tag "pairs"]`, `;` comments and `%` escape lines: through end of line
//! - `( variations )`, nested ones included, plus one trailing separator
//! - `{ commentary }` plus one trailing separator
//! - move-number labels `12.` and `12...`
//! - NAGs (`$14`) and annotation glyphs (`+ # ! ?`)
//!
//! A game termination marker (`1-0`, `0-1`, `1/2-1/2`, `*`) ends the movetext.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;

use super::san::MoveToken;
use crate::error::Result;

/// Create a lazy token stream over `text`
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    at_line_start: bool,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Tokenizer {
            chars: text.chars().peekable(),
            at_line_start: true,
            finished: false,
        }
    }

    /// Next move exactly as written, or None once the movetext is exhausted
    pub fn next_raw(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        let mut token = String::new();
        while let Some((c, line_start)) = self.bump() {
            match c {
                '[' | ';' => {
                    self.skip_line();
                    if !token.is_empty() {
                        break;
                    }
                }
                '%' if line_start => self.skip_line(),
                '(' => {
                    self.skip_variation();
                    if !token.is_empty() {
                        break;
                    }
                }
                '{' => {
                    self.skip_comment();
                    if !token.is_empty() {
                        break;
                    }
                }
                '$' => self.skip_digits(),
                '*' => {
                    self.finished = true;
                    break;
                }
                '0'..='9' if token.is_empty() => self.label_or_coordinate(c, &mut token),
                c if c.is_whitespace() => {
                    if !token.is_empty() {
                        break;
                    }
                }
                'a'..='h' | 'R' | 'N' | 'B' | 'Q' | 'K' | 'x' | 'O' | '-' | '=' | '0'..='9' => {
                    token.push(c)
                }
                '/' if token.starts_with(|d: char| d.is_ascii_digit()) => token.push(c),
                _ => {} // annotation glyphs and anything else
            }
        }

        if token.is_empty() || is_termination_marker(&token) {
            self.finished = true;
            return None;
        }

        trace!("token '{}'", token);
        Some(token)
    }

    fn bump(&mut self) -> Option<(char, bool)> {
        let c = self.chars.next()?;
        let line_start = self.at_line_start;
        self.at_line_start = c == '\n';
        Some((c, line_start))
    }

    fn skip_line(&mut self) {
        while let Some((c, _)) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_variation(&mut self) {
        let mut depth = 1usize;
        while let Some((c, _)) = self.bump() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                // parens inside a comment do not count
                '{' => self.skip_until('}'),
                _ => {}
            }
        }
        self.skip_separator();
    }

    fn skip_comment(&mut self) {
        self.skip_until('}');
        self.skip_separator();
    }

    fn skip_until(&mut self, close: char) {
        while let Some((c, _)) = self.bump() {
            if c == close {
                break;
            }
        }
    }

    fn skip_separator(&mut self) {
        if self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn skip_digits(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    /// A digit at the start of a token is a move-number label when a '.'
    /// follows the run of digits; otherwise the digits open the token.
    fn label_or_coordinate(&mut self, first: char, token: &mut String) {
        let mut digits = String::from(first);
        while let Some(&next) = self.chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            self.bump();
        }

        if self.chars.peek() == Some(&'.') {
            while self.chars.peek() == Some(&'.') {
                self.bump();
            }
            self.skip_separator();
        } else {
            token.push_str(&digits);
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<MoveToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_raw().map(|raw| raw.parse())
    }
}

fn is_termination_marker(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tokens(text: &str) -> Vec<String> {
        let mut tokenizer = tokenize(text);
        std::iter::from_fn(|| tokenizer.next_raw()).collect()
    }

    #[test]
    fn test_plain_movetext() {
        assert_eq!(raw_tokens("1. e4 c5 2. Nf3 d6"), ["e4", "c5", "Nf3", "d6"]);
    }

    #[test]
    fn test_labels_without_spaces_and_black_continuations() {
        assert_eq!(raw_tokens("1.e4 e5 2.Nf3 2...Nc6 10. Bb5"), ["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    }

    #[test]
    fn test_tags_comments_and_variations_are_dropped() {
        let text = "[Event \"Casual\"]\n[Site \"Paris\"]\n\n1. e4 {best by test} e5 (1... c5 2. Nf3 (2. c3)) 2. Nf3 ; rest of line\nNc6";
        assert_eq!(raw_tokens(text), ["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_annotations_are_dropped() {
        assert_eq!(raw_tokens("1. e4! e5?! 2. Qh5 $2 Nc6 3. Bc4 Nf6?? 4. Qxf7#"), [
            "e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7"
        ]);
    }

    #[test]
    fn test_last_token_at_end_of_input_is_kept() {
        assert_eq!(raw_tokens("1. d4 d5 2. c4"), ["d4", "d5", "c4"]);
        assert_eq!(raw_tokens("1. d4 d5 2. c4\n"), ["d4", "d5", "c4"]);
    }

    #[test]
    fn test_result_marker_ends_movetext() {
        assert_eq!(raw_tokens("1. f3 e5 2. g4 Qh4# 0-1"), ["f3", "e5", "g4", "Qh4"]);
        assert_eq!(raw_tokens("1. e4 e5 1/2-1/2 2. Nf3"), ["e4", "e5"]);
        assert_eq!(raw_tokens("1. e4 e5 *"), ["e4", "e5"]);
    }

    #[test]
    fn test_escape_lines() {
        assert_eq!(raw_tokens("% exported by a tool\n1. e4 e5"), ["e4", "e5"]);
    }

    #[test]
    fn test_tokens_parse_into_moves() {
        let parsed: Vec<_> = tokenize("1. e4 Zz4").collect();
        assert!(parsed[0].is_ok());
        assert!(parsed[1].is_err());
    }
}
