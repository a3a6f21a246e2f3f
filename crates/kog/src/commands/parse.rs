use kog_decode::FormParser;

use super::input::{to_value, InputFormat, InputSource};

/// Print the value tree for a body as pretty JSON.
pub fn run_parse(
    source: &InputSource,
    format: InputFormat,
    parser: &FormParser,
) -> anyhow::Result<u8> {
    let raw = source.read()?;
    let value = to_value(&raw, format, parser)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(0)
}
