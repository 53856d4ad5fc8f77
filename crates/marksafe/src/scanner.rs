//! Built-in markup token scanner.
//!
//! A small state machine that splits input into `Text` runs and `Tag` tokens
//! per the model in [`crate::token`]. It is deliberately not a conforming
//! HTML5 tokenizer: anything that is not an unambiguous tag (comments,
//! doctypes, processing instructions, stray `<`, a tag left open at end of
//! input) is emitted as raw text, which the pipeline then entity-escapes.
//! That bias makes the scanner total over all inputs and means malformed
//! markup can only ever become inert text.

use crate::token::{AttrMap, AttrValue, Token, TokenSource};

pub struct MarkupScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> MarkupScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Advances to the next `<` (or end of input) and returns the skipped
    /// slice start.
    fn run_to_next_lt(&mut self) {
        let rel = self.input[self.pos..]
            .find('<')
            .unwrap_or(self.input.len() - self.pos);
        self.pos += rel;
    }

    fn scan_next(&mut self) -> Option<Token> {
        if self.pos >= self.input.len() {
            return None;
        }
        if self.peek() != Some('<') {
            let start = self.pos;
            self.run_to_next_lt();
            return Some(Token::Text {
                raw: self.input[start..self.pos].to_string(),
            });
        }
        Some(self.scan_markup())
    }

    fn scan_markup(&mut self) -> Token {
        let start = self.pos;
        match self.input[self.pos + 1..].chars().next() {
            Some(c) if c.is_ascii_alphabetic() => self.scan_start_tag(start),
            Some('/') => self.scan_end_tag(start),
            Some('!') | Some('?') => self.scan_declaration(start),
            _ => {
                // Stray '<' (end of input, whitespace, digit, ...): text.
                self.bump();
                self.run_to_next_lt();
                Token::Text {
                    raw: self.input[start..self.pos].to_string(),
                }
            }
        }
    }

    /// Comments, doctypes and processing instructions are swallowed whole and
    /// handed to the pipeline as text. `<!--` scans for a matching `-->` so a
    /// `>` inside the comment body does not cut it short.
    fn scan_declaration(&mut self, start: usize) -> Token {
        let rest = &self.input[start..];
        let len = if rest.starts_with("<!--") {
            rest.find("-->").map(|i| i + 3)
        } else {
            rest.find('>').map(|i| i + 1)
        };
        self.pos = match len {
            Some(len) => start + len,
            None => self.input.len(),
        };
        Token::Text {
            raw: self.input[start..self.pos].to_string(),
        }
    }

    /// A tag still open at end of input is not a tag at all: emit the
    /// remainder as text.
    fn unterminated(&mut self, start: usize) -> Token {
        self.pos = self.input.len();
        Token::Text {
            raw: self.input[start..].to_string(),
        }
    }

    fn scan_name(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || matches!(c, '/' | '>' | '=') {
                break;
            }
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn scan_end_tag(&mut self, start: usize) -> Token {
        self.bump(); // '<'
        self.bump(); // '/'
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            // `</>` or `</ ...`: bogus, swallow through '>' as text.
            return self.scan_declaration(start);
        }
        let name = self.scan_name();
        loop {
            match self.bump() {
                Some('>') => break,
                Some(_) => {}
                None => return self.unterminated(start),
            }
        }
        Token::Tag {
            name,
            attributes: AttrMap::new(),
            is_end_tag: true,
            self_closing: false,
            raw: self.input[start..self.pos].to_string(),
        }
    }

    fn scan_start_tag(&mut self, start: usize) -> Token {
        self.bump(); // '<'
        let name = self.scan_name();
        let mut attributes = AttrMap::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return self.unterminated(start),
                Some('>') => {
                    self.bump();
                    break;
                }
                Some('/') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.peek() == Some('>') {
                        self.bump();
                        self_closing = true;
                        break;
                    }
                    // Stray '/' inside the tag: ignored.
                }
                Some('=') => {
                    // '=' with no preceding attribute name: skip it.
                    self.bump();
                }
                Some(_) => {
                    let attr_name = self.scan_name();
                    if attr_name.is_empty() {
                        self.bump();
                        continue;
                    }
                    self.skip_whitespace();
                    let value = if self.peek() == Some('=') {
                        self.bump();
                        self.skip_whitespace();
                        match self.scan_attr_value() {
                            Some(v) => AttrValue::Text(v),
                            None => return self.unterminated(start),
                        }
                    } else {
                        AttrValue::Flag
                    };
                    // First occurrence of a duplicated attribute wins.
                    attributes.entry(attr_name).or_insert(value);
                }
            }
        }
        Token::Tag {
            name,
            attributes,
            is_end_tag: false,
            self_closing,
            raw: self.input[start..self.pos].to_string(),
        }
    }

    /// `None` means the value ran off the end of the input.
    fn scan_attr_value(&mut self) -> Option<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                loop {
                    match self.peek() {
                        Some(c) if c == quote => {
                            let value = self.input[start..self.pos].to_string();
                            self.bump();
                            return Some(value);
                        }
                        Some(_) => {
                            self.bump();
                        }
                        None => return None,
                    }
                }
            }
            _ => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_ascii_whitespace() || c == '>' {
                        break;
                    }
                    self.bump();
                }
                Some(self.input[start..self.pos].to_string())
            }
        }
    }
}

impl TokenSource for MarkupScanner<'_> {
    fn next_token(&mut self) -> Option<Token> {
        self.scan_next()
    }
}
