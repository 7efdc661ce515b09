#![allow(dead_code)]

use lookahead_json::{Token, Value};

/// Converts a parsed tree into `serde_json`'s model so it can be serialized.
pub fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::from(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_serde(value)))
                .collect(),
        ),
    }
}

pub fn to_json(value: &Value) -> String {
    serde_json::to_string(&to_serde(value)).unwrap()
}

/// Writes a token back out as source text.
pub fn render(token: &Token) -> String {
    match token {
        Token::String(text) => format!("\"{}\"", text.replace('"', "\\\"")),
        Token::Null => String::from("null"),
        Token::True => String::from("true"),
        Token::False => String::from("false"),
        other => other.lexeme().to_string(),
    }
}
