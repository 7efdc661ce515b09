//! A small JSON parser: a pull-based lexer feeding a recursive-descent
//! parser with one token of lookahead.
//!
//! Numbers are non-negative integers, `\"` is the only string escape, and
//! only the plain space separates tokens unless
//! [`ParserConfig::json_whitespace`] is set.
//!
//! ```
//! use lookahead_json::{parse, Value};
//!
//! let value = parse(r#"{"a":[1,"two",null]}"#).unwrap();
//! assert_eq!(value.get("a").and_then(|a| a.get_index(1)), Some(&Value::String("two".into())));
//! ```
use indexmap::IndexMap;

mod config;
mod parse;
mod tokenize;

pub use config::ParserConfig;
pub use parse::{parse, parse_with_config, Error, ParseError, Parser};
pub use tokenize::{tokenize, LexError, Lexer, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// literal characters `null`
    Null,

    /// literal characters `true` or `false`
    Boolean(bool),

    /// an integer, written as a run of digits
    Number(i64),

    /// a string of characters wrapped in double quotes
    String(String),

    /// an array of values
    Array(Vec<Value>),

    /// an object with key-value pairs, in insertion order; a repeated key
    /// overwrites the earlier value in place
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
