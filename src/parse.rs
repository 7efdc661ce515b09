use std::mem;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::tokenize::{LexError, Lexer, Token, TokenKind};
use crate::Value;

pub fn parse(input: &str) -> Result<Value, Error> {
    parse_with_config(input, ParserConfig::default())
}

pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Value, Error> {
    Parser::with_config(input, config)?.parse()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {actual}")]
    Mismatch { expected: TokenKind, actual: TokenKind },
    #[error("expected NUMBER, STRING, TRUE, FALSE, NULL, {{ or [, found {actual}")]
    ExpectedValue { actual: TokenKind },
    #[error("number {0} does not fit in a 64-bit integer")]
    NumberOutOfRange(String),
    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

/// Recursive-descent parser holding one token of lookahead.
///
/// Every grammar rule is entered with the lookahead primed and leaves it
/// primed for the next rule:
///
/// ```text
/// value  := NUMBER | STRING | TRUE | FALSE | NULL | object | array
/// object := '{' [ STRING ':' value (',' STRING ':' value)* ] '}'
/// array  := '[' [ value (',' value)* ] ']'
/// ```
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self, Error> {
        Self::with_config(input, ParserConfig::default())
    }

    /// Primes the lookahead, so a bad first token already fails here.
    pub fn with_config(input: &str, config: ParserConfig) -> Result<Self, Error> {
        let mut lexer = Lexer::with_config(input, config);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            config,
            depth: 0,
        })
    }

    /// Parses a single root value, which must be followed by end of input.
    pub fn parse(mut self) -> Result<Value, Error> {
        debug!(first = %self.current.kind(), "parse started");
        let result = self.parse_document();
        match &result {
            Ok(value) => debug!(root = value.type_name(), "parse finished"),
            Err(err) => debug!(error = %err, position = self.lexer.position(), "parse failed"),
        }
        result
    }

    fn parse_document(&mut self) -> Result<Value, Error> {
        let value = self.parse_value()?;
        self.match_token(TokenKind::EndOfInput)?;
        Ok(value)
    }

    fn is_token(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    /// Replaces the lookahead with the next token and hands back the old one.
    fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn match_token(&mut self, expected: TokenKind) -> Result<String, Error> {
        let actual = self.current.kind();
        if actual != expected {
            return Err(ParseError::Mismatch { expected, actual }.into());
        }
        Ok(self.advance()?.into_lexeme())
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        match self.current.kind() {
            TokenKind::Number => {
                let digits = self.match_token(TokenKind::Number)?;
                let number = digits
                    .parse::<i64>()
                    .map_err(|_| ParseError::NumberOutOfRange(digits))?;
                Ok(Value::Number(number))
            }
            TokenKind::String => Ok(Value::String(self.match_token(TokenKind::String)?)),
            TokenKind::True => {
                self.advance()?;
                Ok(Value::Boolean(true))
            }
            TokenKind::False => {
                self.advance()?;
                Ok(Value::Boolean(false))
            }
            TokenKind::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            TokenKind::LeftBrace => {
                self.enter()?;
                self.advance()?;
                let object = self.parse_object()?;
                self.match_token(TokenKind::RightBrace)?;
                self.depth -= 1;
                Ok(object)
            }
            TokenKind::LeftBracket => {
                self.enter()?;
                self.advance()?;
                let array = self.parse_array()?;
                self.match_token(TokenKind::RightBracket)?;
                self.depth -= 1;
                Ok(array)
            }
            actual => Err(ParseError::ExpectedValue { actual }.into()),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        trace!(depth = self.depth, "entering container");
        Ok(())
    }

    // The closing brace is left for the caller to match.
    fn parse_object(&mut self) -> Result<Value, Error> {
        let mut map = IndexMap::new();
        if self.is_token(TokenKind::RightBrace) {
            return Ok(Value::Object(map));
        }

        loop {
            let key = self.match_token(TokenKind::String)?;
            self.match_token(TokenKind::Colon)?;
            let value = self.parse_value()?;
            map.insert(key, value);

            if !self.is_token(TokenKind::Comma) {
                break;
            }
            self.advance()?;
        }

        Ok(Value::Object(map))
    }

    // The closing bracket is left for the caller to match.
    fn parse_array(&mut self) -> Result<Value, Error> {
        let mut array = Vec::new();
        if self.is_token(TokenKind::RightBracket) {
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            if !self.is_token(TokenKind::Comma) {
                break;
            }
            self.advance()?;
        }

        Ok(Value::Array(array))
    }
}
