/// Mock implementations for testing
mod mock_input_source;
mod mock_progress_reporter;

pub use mock_input_source::MockInputSource;
pub use mock_progress_reporter::MockProgressReporter;
