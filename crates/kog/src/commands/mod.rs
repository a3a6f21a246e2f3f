pub mod input;
pub mod parse;
pub mod query;

pub use input::{InputFormat, InputSource};
pub use parse::run_parse;
pub use query::{run_query, ValueKind};
