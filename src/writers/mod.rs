pub mod formatter;
pub mod text_writer;

pub use formatter::{format_result, ResultFormatter};
pub use text_writer::{OutputInfo, TextWriter};
