/// Formatter adapters for rendering dependency collections
mod json_formatter;

pub use json_formatter::JsonFormatter;
