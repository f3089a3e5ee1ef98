/// Stream adapters for process standard input and caller-supplied readers
mod reader_source;
mod stdin_source;

pub use reader_source::ReaderSource;
pub use stdin_source::StdinSource;
