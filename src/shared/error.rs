use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Dependencies were extracted and written
    Success = 0,
    /// Extraction failed (malformed line, I/O error, invalid configuration)
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency extraction.
///
/// Every variant is fatal for the run that produced it. Messages stay on a
/// single line so the CLI can print them as one diagnostic.
#[derive(Debug, Error)]
pub enum GovError {
    /// A `dep` line that does not split into exactly four tokens
    #[error("Malformed dependency line {line:?}: want 4 fields (dep, name, version, digest), got {tokens}")]
    MalformedLine { line: String, tokens: usize },

    #[error("Failed to open input file: {path}: {details}")]
    FileOpen { path: PathBuf, details: String },

    #[error("Failed to read input from {source_name}: {details}")]
    InputRead { source_name: String, details: String },

    #[error("Failed to write to file: {path}: {details}")]
    FileWrite { path: PathBuf, details: String },

    /// Rejected before any input is read
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl GovError {
    /// Builds a `Configuration` error from any message
    pub fn configuration(message: impl Into<String>) -> Self {
        GovError::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::Failure), "Failure (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_malformed_line_display() {
        let error = GovError::MalformedLine {
            line: "dep".to_string(),
            tokens: 1,
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed dependency line"));
        assert!(display.contains("\"dep\""));
        assert!(display.contains("got 1"));
        assert!(!display.contains('\n'));
    }

    #[test]
    fn test_malformed_line_display_escapes_tabs() {
        let error = GovError::MalformedLine {
            line: "dep\tonly\ttwo".to_string(),
            tokens: 3,
        };
        let display = format!("{}", error);
        assert!(display.contains("dep\\tonly\\ttwo"));
        assert!(!display.contains('\t'));
    }

    #[test]
    fn test_file_open_display() {
        let error = GovError::FileOpen {
            path: PathBuf::from("/test/deps.txt"),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to open input file"));
        assert!(display.contains("/test/deps.txt"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_input_read_display() {
        let error = GovError::InputRead {
            source_name: "stdin".to_string(),
            details: "broken pipe".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to read input from stdin: broken pipe"
        );
    }

    #[test]
    fn test_file_write_display() {
        let error = GovError::FileWrite {
            path: PathBuf::from("/test/deps.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/deps.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_configuration_display() {
        let error = GovError::configuration("input path must not be empty");
        assert_eq!(
            format!("{}", error),
            "Invalid configuration: input path must not be empty"
        );
    }
}
