use crate::adapters::outbound::formatters::JsonFormatter;
use crate::ports::outbound::DependencyFormatter;

/// Formatter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    /// Single-line JSON, the default output
    Json,
    /// Indented JSON for humans
    PrettyJson,
}

impl FormatterType {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            FormatterType::PrettyJson
        } else {
            FormatterType::Json
        }
    }
}

/// Factory for creating dependency formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use govdeps::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Json);
    /// assert_eq!(formatter.format(&[]).unwrap(), "[]");
    /// ```
    pub fn create(format: FormatterType) -> Box<dyn DependencyFormatter> {
        match format {
            FormatterType::Json => Box::new(JsonFormatter::new()),
            FormatterType::PrettyJson => Box::new(JsonFormatter::pretty()),
        }
    }
}
