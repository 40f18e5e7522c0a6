pub mod concurrent_reader;
pub mod record_reader;

pub use concurrent_reader::{ConcurrentReader, InputData};
pub use record_reader::{list_input_files, RecordReader, SourceRecord};
