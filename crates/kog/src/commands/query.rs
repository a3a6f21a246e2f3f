//! `kog query`: pull one field out of a body with a primitive decoder.

use clap::ValueEnum;
use kog_decode::decoder::{bool, float, get_in, int, list_of, one_of, string, value};
use kog_decode::{DecodeError, Decoder, FormParser, Value};
use tracing::debug;

use super::input::{to_value, InputFormat, InputSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
    /// The raw subtree, whatever its shape
    Value,
}

impl ValueKind {
    fn decoder(self) -> Decoder<Value> {
        match self {
            ValueKind::String => string().map(Value::String),
            ValueKind::Int => int().map(Value::from),
            ValueKind::Float => float().map(Value::from),
            ValueKind::Bool => bool().map(Value::Bool),
            ValueKind::Value => value(),
        }
    }
}

/// Build the decoder for a query.
///
/// With `many`, a single value is accepted as a one-element list, which is how
/// a form field that appeared once differs from one that repeated.
pub fn query_decoder(path: &[String], kind: ValueKind, many: bool) -> Decoder<Value> {
    let leaf = kind.decoder();
    let leaf = if many {
        one_of([
            list_of(leaf.clone()).map(Value::List),
            leaf.map(|single| Value::List(vec![single])),
        ])
    } else {
        leaf
    };
    get_in(path.iter().cloned(), leaf)
}

/// Decode `path` from `value` as `kind`.
pub fn query(
    value: &Value,
    path: &[String],
    kind: ValueKind,
    many: bool,
) -> Result<Value, DecodeError> {
    query_decoder(path, kind, many).decode(value)
}

/// Print the decoded field as JSON, or the decode error on stderr.
pub fn run_query(
    source: &InputSource,
    format: InputFormat,
    parser: &FormParser,
    path: &[String],
    kind: ValueKind,
    many: bool,
) -> anyhow::Result<u8> {
    let raw = source.read()?;
    let tree = to_value(&raw, format, parser)?;
    match query(&tree, path, kind, many) {
        Ok(found) => {
            println!("{}", serde_json::to_string(&found)?);
            Ok(0)
        }
        Err(err) => {
            debug!(?path, ?kind, "query failed");
            eprintln!("error: {}", err);
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_query_form_int() {
        let tree = FormParser::default().parse(Some("n=41&s=x"));
        assert_eq!(
            query(&tree, &path(&["n"]), ValueKind::Int, false),
            Ok(Value::from(41_i64))
        );
        assert_eq!(
            query(&tree, &path(&["s"]), ValueKind::Int, false),
            Err(DecodeError::NotAnInt("x".to_string()))
        );
    }

    #[test]
    fn test_query_many() {
        let tree = FormParser::default().parse(Some("t=a&t=b&u=c"));
        assert_eq!(
            query(&tree, &path(&["t"]), ValueKind::String, true),
            Ok(Value::list([Value::from("a"), Value::from("b")]))
        );
        assert_eq!(
            query(&tree, &path(&["u"]), ValueKind::String, true),
            Ok(Value::list([Value::from("c")]))
        );
    }

    #[test]
    fn test_query_nested_json() -> anyhow::Result<()> {
        let tree = kog_decode::json::parse(r#"{"a": {"b": {"ok": true, "x": 1.5}}}"#)?;
        assert_eq!(
            query(&tree, &path(&["a", "b", "ok"]), ValueKind::Bool, false),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            query(&tree, &path(&["a", "b", "x"]), ValueKind::Float, false),
            Ok(Value::from(1.5))
        );
        assert_eq!(
            query(&tree, &path(&["a", "missing"]), ValueKind::Value, false),
            Err(DecodeError::MissingKey("missing".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_query_empty_path_returns_root() {
        let tree = FormParser::default().parse(Some("k=v"));
        assert_eq!(query(&tree, &[], ValueKind::Value, false), Ok(tree.clone()));
    }

    #[test]
    fn test_run_query_exit_codes() -> anyhow::Result<()> {
        let parser = FormParser::default();
        let source = InputSource::Text("n=1".to_string());
        assert_eq!(
            run_query(&source, InputFormat::Form, &parser, &path(&["n"]), ValueKind::Int, false)?,
            0
        );
        assert_eq!(
            run_query(&source, InputFormat::Form, &parser, &path(&["m"]), ValueKind::Int, false)?,
            1
        );
        Ok(())
    }
}
