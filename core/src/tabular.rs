//! CSV adapters for the company source and result sink ports.

mod reader;
mod writer;

pub use reader::{CsvCompanySource, read_rows};
pub use writer::CsvResultSink;
