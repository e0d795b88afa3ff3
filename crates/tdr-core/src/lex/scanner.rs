// TDR - Tagged-scene Description Representation
//
// Copyright (c) 2025 TDR contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The TDR lexer.
//!
//! A character-level state machine with a single bit of state: whether the
//! scan position is inside a tag bracket. Outside a tag, everything up to
//! the next `<` is text content; inside, the scanner produces punctuation,
//! identifiers and quoted strings.
//!
//! The lexer never fails. Every problem is reported through the
//! [`DiagnosticList`] and the scan continues with a best-guess token, so
//! the parser always receives a stream terminated by exactly one
//! [`TokenKind::EndOfFile`].

use crate::diagnostic::{Diagnostic, DiagnosticList};
use crate::lex::span::SourcePos;
use crate::lex::token::{Token, TokenKind};

/// Lexes `source` into a token stream, reporting problems into
/// `diagnostics`.
///
/// The returned sequence always ends with a single
/// [`TokenKind::EndOfFile`] token.
///
/// # Examples
///
/// ```
/// use tdr_core::{lex, DiagnosticList, TokenKind};
///
/// let mut diagnostics = DiagnosticList::new();
/// let tokens = lex("<camera fov=\"60\"/>", &mut diagnostics);
///
/// assert!(diagnostics.is_empty());
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::TagOpen,
///         TokenKind::Identifier,
///         TokenKind::Identifier,
///         TokenKind::Equals,
///         TokenKind::String,
///         TokenKind::TagSelfClose,
///         TokenKind::EndOfFile,
///     ]
/// );
/// ```
pub fn lex(source: &str, diagnostics: &mut DiagnosticList) -> Vec<Token> {
    Scanner::new(source, diagnostics).run()
}

struct Scanner<'d> {
    chars: Vec<char>,
    index: usize,
    pos: SourcePos,
    inside_tag: bool,
    tokens: Vec<Token>,
    diagnostics: &'d mut DiagnosticList,
}

impl<'d> Scanner<'d> {
    fn new(source: &str, diagnostics: &'d mut DiagnosticList) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            pos: SourcePos::start(),
            inside_tag: false,
            tokens: Vec::new(),
            diagnostics,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// Consumes one character, keeping the line/column counters current.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.index += 1;
            if c == '\n' {
                self.pos.next_line();
            } else {
                self.pos.advance_col();
            }
        }
    }

    fn report(&mut self, pos: SourcePos, message: impl Into<String>) {
        self.diagnostics.report(Diagnostic::at(pos, message));
    }

    fn push(&mut self, kind: TokenKind, pos: SourcePos) {
        self.tokens.push(Token::punct(kind, pos));
    }

    fn run(mut self) -> Vec<Token> {
        while self.peek().is_some() {
            if self.inside_tag {
                self.scan_in_tag();
            } else {
                self.scan_text();
            }
        }
        self.tokens.push(Token::punct(TokenKind::EndOfFile, self.pos));
        self.tokens
    }

    /// Scans content outside a tag bracket: a text block up to the next
    /// `<`, with `//` comments elided, then the tag opener itself.
    fn scan_text(&mut self) {
        let mut value = String::new();
        let mut start = SourcePos::default();

        while let Some(c) = self.peek() {
            if c == '<' {
                break;
            }
            if c == '/' && self.peek_at(1) == Some('/') {
                self.skip_comment();
                continue;
            }
            let pos = self.pos;
            self.advance();
            if !start.is_known() && !c.is_ascii_whitespace() {
                start = pos;
            }
            value.push(c);
        }

        let trimmed = value.trim_matches(|c: char| c.is_ascii_whitespace());
        if !trimmed.is_empty() {
            self.tokens.push(Token::new(TokenKind::Text, trimmed, start));
        }

        if self.peek() == Some('<') {
            self.scan_tag_opener();
        }
    }

    /// Scans `<` plus the character after it, deciding between a start tag,
    /// an end tag, and an invalid opener.
    fn scan_tag_opener(&mut self) {
        let open_pos = self.pos;
        self.advance(); // '<'

        match self.peek() {
            Some('/') => {
                self.advance();
                self.push(TokenKind::TagEndOpen, open_pos);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.push(TokenKind::TagOpen, open_pos);
            }
            _ => {
                self.report(open_pos, "Expected tag name after '<'");
                self.push(TokenKind::TagOpen, open_pos);
            }
        }
        self.inside_tag = true;
    }

    /// Scans one item inside a tag bracket.
    fn scan_in_tag(&mut self) {
        let Some(c) = self.peek() else { return };
        let start = self.pos;

        match c {
            c if c.is_ascii_whitespace() => {
                self.advance();
            }
            '/' if self.peek_at(1) == Some('>') => {
                self.advance();
                self.advance();
                self.push(TokenKind::TagSelfClose, start);
                self.inside_tag = false;
            }
            '/' if self.peek_at(1) == Some('/') => {
                self.skip_comment();
            }
            '/' => {
                self.advance();
                self.report(start, "Expected '>' after '/'");
                self.push(TokenKind::TagSelfClose, start);
                self.inside_tag = false;
            }
            '>' => {
                self.advance();
                self.push(TokenKind::TagClose, start);
                self.inside_tag = false;
            }
            '=' => {
                self.advance();
                self.push(TokenKind::Equals, start);
            }
            '"' | '\'' => self.scan_string(),
            c if c.is_ascii_alphabetic() => self.scan_identifier(),
            other => {
                self.advance();
                self.report(start, format!("Unexpected character '{}'", other));
            }
        }
    }

    /// Scans an identifier: `[A-Za-z][A-Za-z0-9_-]*`.
    fn scan_identifier(&mut self) {
        let start = self.pos;
        let mut value = String::new();

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                self.advance();
                value.push(c);
            } else {
                break;
            }
        }

        self.tokens.push(Token::new(TokenKind::Identifier, value, start));
    }

    /// Scans a quoted string literal delimited by the quote character that
    /// opened it. Recognized escapes: `\n \t \\ \" \'`; any other escaped
    /// character is passed through verbatim. An unterminated literal or an
    /// embedded newline terminates the literal with a diagnostic.
    fn scan_string(&mut self) {
        let start = self.pos;
        let Some(quote) = self.peek() else { return };
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                None => {
                    self.report(start, "Unterminated string literal");
                    break;
                }
                Some('\n') => {
                    let newline_pos = self.pos;
                    self.report(newline_pos, "Unexpected newline in string literal");
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(escaped) => {
                            value.push(match escaped {
                                'n' => '\n',
                                't' => '\t',
                                other => other,
                            });
                            self.advance();
                        }
                        None => {
                            self.report(start, "Unterminated string literal");
                            break;
                        }
                    }
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        self.tokens.push(Token::new(TokenKind::String, value, start));
    }

    /// Skips a `//` comment up to (not including) the end of the line.
    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ok(source: &str) -> Vec<Token> {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex(source, &mut diagnostics);
        assert!(
            diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            diagnostics.as_slice()
        );
        tokens
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    // ==================== Basic structure ====================

    #[test]
    fn test_empty_input_yields_eof_only() {
        let tokens = lex_ok("");
        assert_eq!(kinds(&tokens), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_whitespace_only_yields_eof_only() {
        let tokens = lex_ok("  \n\t \n");
        assert_eq!(kinds(&tokens), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_simple_tag_pair() {
        let tokens = lex_ok("<scene></scene>");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::TagOpen,
                TokenKind::Identifier,
                TokenKind::TagClose,
                TokenKind::TagEndOpen,
                TokenKind::Identifier,
                TokenKind::TagClose,
                TokenKind::EndOfFile,
            ]
        );
        assert_eq!(tokens[1].value, "scene");
        assert_eq!(tokens[4].value, "scene");
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = lex_ok("<camera/>");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::TagOpen,
                TokenKind::Identifier,
                TokenKind::TagSelfClose,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_eof_token_is_last_and_unique() {
        let tokens = lex_ok("<a/><b/>");
        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eof_count, 1);
        assert!(tokens.last().unwrap().is_eof());
    }

    // ==================== Positions ====================

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex_ok("<a/>");
        assert_eq!(tokens[0].pos, SourcePos::new(1, 1));
        assert_eq!(tokens[1].pos, SourcePos::new(1, 2));
        assert_eq!(tokens[2].pos, SourcePos::new(1, 3));
    }

    #[test]
    fn test_newline_resets_column() {
        let tokens = lex_ok("<a>\n</a>");
        // TagEndOpen starts at line 2, column 1.
        assert_eq!(tokens[3].kind, TokenKind::TagEndOpen);
        assert_eq!(tokens[3].pos, SourcePos::new(2, 1));
    }

    #[test]
    fn test_string_token_position_is_opening_quote() {
        let tokens = lex_ok("<m name=\"metal\"/>");
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.pos, SourcePos::new(1, 9));
    }

    // ==================== Attributes and strings ====================

    #[test]
    fn test_attribute_with_double_quotes() {
        let tokens = lex_ok("<m name=\"metal\"/>");
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, "metal");
    }

    #[test]
    fn test_attribute_with_single_quotes() {
        let tokens = lex_ok("<m name='wood'/>");
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, "wood");
    }

    #[test]
    fn test_quote_styles_do_not_terminate_each_other() {
        let tokens = lex_ok("<m a='say \"hi\"' b=\"it's\"/>");
        let strings: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::String)
            .map(|t| t.value.clone())
            .collect();
        assert_eq!(strings, vec!["say \"hi\"", "it's"]);
    }

    #[test]
    fn test_recognized_escapes() {
        let tokens = lex_ok(r#"<m a="line\nbreak\ttab\\slash\"quote\'tick"/>"#);
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, "line\nbreak\ttab\\slash\"quote'tick");
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        let tokens = lex_ok(r#"<m a="\q"/>"#);
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, "q");
    }

    #[test]
    fn test_unterminated_string_reports_and_continues() {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex("<m a=\"oops", &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().message.contains("Unterminated"));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::String));
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_newline_in_string_reports_and_terminates_literal() {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex("<m a=\"two\nlines\"/>", &mut diagnostics);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("newline in string")));
        let string = tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, "two");
    }

    // ==================== Identifiers ====================

    #[test]
    fn test_identifier_charset() {
        let tokens = lex_ok("<light-probe_2/>");
        assert_eq!(tokens[1].value, "light-probe_2");
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        let tokens = lex_ok("<a b=\"c\"/>");
        assert_eq!(tokens[1].value, "a");
        assert_eq!(tokens[2].value, "b");
    }

    // ==================== Text content ====================

    #[test]
    fn test_text_is_trimmed() {
        let tokens = lex_ok("<color>  #FF8800  </color>");
        let text = tokens.iter().find(|t| t.kind == TokenKind::Text).unwrap();
        assert_eq!(text.value, "#FF8800");
    }

    #[test]
    fn test_text_position_is_first_nonblank_char() {
        let tokens = lex_ok("<color>  #FF8800</color>");
        let text = tokens.iter().find(|t| t.kind == TokenKind::Text).unwrap();
        assert_eq!(text.pos, SourcePos::new(1, 10));
    }

    #[test]
    fn test_blank_text_is_suppressed() {
        let tokens = lex_ok("<a>   \n  </a>");
        assert!(!tokens.iter().any(|t| t.kind == TokenKind::Text));
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let tokens = lex_ok("<v>1 2 3</v>");
        let text = tokens.iter().find(|t| t.kind == TokenKind::Text).unwrap();
        assert_eq!(text.value, "1 2 3");
    }

    // ==================== Comments ====================

    #[test]
    fn test_comment_between_tags() {
        let tokens = lex_ok("// scene file\n<a/>");
        assert_eq!(tokens[0].kind, TokenKind::TagOpen);
        assert_eq!(tokens[0].pos, SourcePos::new(2, 1));
    }

    #[test]
    fn test_comment_elided_from_text() {
        let tokens = lex_ok("<v>1 2 3 // a vector\n</v>");
        let text = tokens.iter().find(|t| t.kind == TokenKind::Text).unwrap();
        assert_eq!(text.value, "1 2 3");
    }

    #[test]
    fn test_comment_inside_tag() {
        let tokens = lex_ok("<camera // main view\n fov=\"60\"/>");
        assert!(tokens.iter().any(|t| t.value == "fov"));
    }

    #[test]
    fn test_single_slash_in_text_is_kept() {
        let tokens = lex_ok("<p>a/b</p>");
        let text = tokens.iter().find(|t| t.kind == TokenKind::Text).unwrap();
        assert_eq!(text.value, "a/b");
    }

    // ==================== Recovery ====================

    #[test]
    fn test_invalid_tag_opener_reports_best_guess() {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex("<1/>", &mut diagnostics);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("Expected tag name")));
        // Best-guess TagOpen is still emitted so the parser can continue.
        assert_eq!(tokens[0].kind, TokenKind::TagOpen);
    }

    #[test]
    fn test_stray_character_inside_tag() {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex("<a ~ b=\"c\"/>", &mut diagnostics);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("Unexpected character '~'")));
        assert!(tokens.iter().any(|t| t.value == "b"));
    }

    #[test]
    fn test_lone_slash_inside_tag_becomes_self_close() {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex("<a / qqq", &mut diagnostics);
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("Expected '>' after '/'")));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::TagSelfClose));
    }

    #[test]
    fn test_lexer_diagnostics_in_scan_order() {
        let mut diagnostics = DiagnosticList::new();
        lex("<a ~ x=\"unterminated", &mut diagnostics);
        let positions: Vec<_> = diagnostics.iter().map(|d| d.location.pos).collect();
        let mut sorted = positions.clone();
        sorted.sort_by_key(|p| (p.line(), p.column()));
        assert_eq!(positions, sorted);
    }
}
