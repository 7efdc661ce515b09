mod common;

use common::to_json;
use indexmap::IndexMap;
use lookahead_json::{parse, Error, LexError, ParseError, TokenKind, Value};

fn object(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<IndexMap<_, _>>(),
    )
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

#[test]
fn parses_one_level_object() {
    let input = r#"{"a":1,"b":2}"#;
    let value = parse(input).unwrap();
    assert_eq!(
        value,
        object(vec![("a", Value::Number(1)), ("b", Value::Number(2))])
    );
    assert_eq!(to_json(&value), input);
}

#[test]
fn parses_one_level_array() {
    let input = r#"[1,2,3,111,"afafafgsdff",false,null]"#;
    let value = parse(input).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Number(1),
            Value::Number(2),
            Value::Number(3),
            Value::Number(111),
            string("afafafgsdff"),
            Value::Boolean(false),
            Value::Null,
        ])
    );
    assert_eq!(to_json(&value), input);
}

#[test]
fn parses_nested_document() {
    let input = r#"{"a":[1,23,"nnn",{"a":1,"b":null,"v":[123,null,"123123"]}],"b":["123123","ok"]}"#;
    let value = parse(input).unwrap();
    let expected = object(vec![
        (
            "a",
            Value::Array(vec![
                Value::Number(1),
                Value::Number(23),
                string("nnn"),
                object(vec![
                    ("a", Value::Number(1)),
                    ("b", Value::Null),
                    (
                        "v",
                        Value::Array(vec![Value::Number(123), Value::Null, string("123123")]),
                    ),
                ]),
            ]),
        ),
        ("b", Value::Array(vec![string("123123"), string("ok")])),
    ]);
    assert_eq!(value, expected);
    assert_eq!(to_json(&value), input);
}

#[test]
fn parses_empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::Object(IndexMap::new()));
    assert_eq!(parse("[]").unwrap(), Value::Array(Vec::new()));
    assert_eq!(
        parse(r#"{"a":{},"b":[[],{}]}"#).unwrap(),
        object(vec![
            ("a", Value::Object(IndexMap::new())),
            (
                "b",
                Value::Array(vec![Value::Array(Vec::new()), Value::Object(IndexMap::new())]),
            ),
        ])
    );
}

#[test]
fn rejects_unknown_word() {
    assert_eq!(
        parse(r#"{"a":tru}"#),
        Err(Error::Lex(LexError::UnexpectedWord(String::from("tru"))))
    );
}

#[test]
fn rejects_truncated_array() {
    assert_eq!(
        parse("[1,2"),
        Err(Error::Parse(ParseError::Mismatch {
            expected: TokenKind::RightBracket,
            actual: TokenKind::EndOfInput,
        }))
    );
}

#[test]
fn unescapes_quote_only() {
    assert_eq!(parse(r#""a\"b""#).unwrap(), string("a\"b"));
    assert_eq!(parse(r#""a\\b""#).unwrap(), string(r"a\\b"));
}

#[test]
fn spaces_between_tokens_are_ignored() {
    let compact = parse(r#"{"a":[1,true],"b":null}"#).unwrap();
    let spaced = parse(r#"  {  "a" :  [ 1 , true ] , "b" : null }  "#).unwrap();
    assert_eq!(compact, spaced);
}
