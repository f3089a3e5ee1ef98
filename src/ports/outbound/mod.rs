/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, process streams, console).
pub mod formatter;
pub mod input_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::DependencyFormatter;
pub use input_source::InputSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
