//! Reading raw bodies and turning them into value trees.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::ValueEnum;
use kog_decode::{json, FormParser, Value};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// URL-encoded form body (`a=1&b=2`)
    Form,
    /// JSON document
    Json,
}

/// Where the raw body comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Text(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Parse `raw` with the front end for `format`.
pub fn to_value(raw: &str, format: InputFormat, parser: &FormParser) -> anyhow::Result<Value> {
    debug!(?format, bytes = raw.len(), "parsing input");
    match format {
        // a trailing newline from a file or a shell pipe is not part of the body
        InputFormat::Form => Ok(parser.parse(Some(raw.trim_end_matches(['\r', '\n'])))),
        InputFormat::Json => Ok(json::parse(raw)?),
    }
}
