use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::config::ParserConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A run of ASCII digits, kept as written
    Number(String),
    /// Key of the key/value pair or a string value, with `\"` already unescaped
    String(String),
    /// No more input
    EndOfInput,
}

/// The kind of a [`Token`] without its payload, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    Null,
    False,
    True,
    Number,
    String,
    EndOfInput,
}

impl TokenKind {
    pub fn symbol(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Null => "NULL",
            TokenKind::False => "FALSE",
            TokenKind::True => "TRUE",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Null => TokenKind::Null,
            Token::False => TokenKind::False,
            Token::True => TokenKind::True,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The text backing this token. Fixed tokens fall back to their
    /// canonical symbol.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number(text) | Token::String(text) => text,
            other => other.kind().symbol(),
        }
    }

    pub fn into_lexeme(self) -> String {
        match self {
            Token::Number(text) | Token::String(text) => text,
            other => other.kind().symbol().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unsupported character {0:?}")]
    UnsupportedChar(char),
    #[error("expected true, false or null, found {0:?}")]
    UnexpectedWord(String),
    #[error("unterminated string")]
    UnterminatedString,
}

/// Pull-based tokenizer over an in-memory text.
///
/// The cursor only moves forward; each call to [`Lexer::next_token`]
/// scans exactly one token.
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    cursor: usize,
    config: ParserConfig,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
            config,
            finished: false,
        }
    }

    /// Cursor position, counted in characters.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(&ch) = self.chars.get(self.cursor) else {
                trace!(position = self.cursor, "end of input");
                return Ok(Token::EndOfInput);
            };
            self.cursor += 1;

            if self.config.is_whitespace(ch) {
                continue;
            }

            let token = match ch {
                '{' => Token::LeftBrace,
                '}' => Token::RightBrace,
                '[' => Token::LeftBracket,
                ']' => Token::RightBracket,
                ':' => Token::Colon,
                ',' => Token::Comma,
                '"' => self.read_string()?,
                c if c.is_ascii_digit() => {
                    Token::Number(self.read_while(c, |c| c.is_ascii_digit()))
                }
                c if c.is_ascii_alphabetic() => {
                    let word = self.read_while(c, |c| c.is_ascii_alphabetic());
                    match word.as_str() {
                        "true" => Token::True,
                        "false" => Token::False,
                        "null" => Token::Null,
                        _ => return Err(LexError::UnexpectedWord(word)),
                    }
                }
                _ => return Err(LexError::UnsupportedChar(ch)),
            };

            trace!(position = self.cursor, kind = %token.kind(), "token");
            return Ok(token);
        }
    }

    // Only `\"` is an escape; every other backslash is kept verbatim.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(&ch) = self.chars.get(self.cursor) {
            self.cursor += 1;
            match ch {
                '"' => return Ok(Token::String(string)),
                '\\' if self.chars.get(self.cursor) == Some(&'"') => {
                    self.cursor += 1;
                    string.push('"');
                }
                _ => string.push(ch),
            }
        }

        Err(LexError::UnterminatedString)
    }

    fn read_while(&mut self, first: char, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::from(first);
        while let Some(&ch) = self.chars.get(self.cursor) {
            if !accept(ch) {
                break;
            }
            text.push(ch);
            self.cursor += 1;
        }
        text
    }
}

/// Yields every token before end of input, then stops. An error is
/// yielded once and ends the iteration.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Token::EndOfInput) => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}
