use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::stream::StdinSource;
use crate::application::dto::ExtractResponse;
use crate::application::factories::{FormatterFactory, FormatterType};
use crate::dependency_extraction::services::StreamAggregator;
use crate::ports::outbound::{InputSource, ProgressReporter};
use crate::shared::Result;

/// ExtractDependenciesUseCase - core use case for dependency extraction
///
/// Opens the input source, runs one aggregation pass over it and hands the
/// collection back. The reader returned by the source is dropped before
/// `execute` returns, so files are closed on success and failure alike.
///
/// # Type Parameters
/// * `S` - InputSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ExtractDependenciesUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> ExtractDependenciesUseCase<S, PR>
where
    S: InputSource,
    PR: ProgressReporter,
{
    /// Creates a new ExtractDependenciesUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the extraction
    ///
    /// # Errors
    /// Propagates, unchanged, the first error from opening the source,
    /// reading it or parsing a `dep` line. No partial result is returned.
    pub fn execute(&mut self) -> Result<ExtractResponse> {
        let source_name = self.source.describe();
        self.progress_reporter
            .report(&format!("📖 Reading Go build info from: {}", source_name));

        let reader = self.source.open()?;
        let dependencies = StreamAggregator::aggregate(reader, &source_name)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Extracted {} dependency(ies)",
            dependencies.len()
        ));

        Ok(ExtractResponse::new(dependencies))
    }
}

/// Reads `go version -v -m` output from standard input and returns the
/// dependencies as a compact JSON array.
pub fn parse_dependencies() -> Result<String> {
    parse_dependencies_from(StdinSource::new())
}

/// Same as [`parse_dependencies`], reading from the given source instead.
pub fn parse_dependencies_from<S: InputSource>(source: S) -> Result<String> {
    let mut use_case = ExtractDependenciesUseCase::new(source, StderrProgressReporter::quiet());
    let response = use_case.execute()?;
    FormatterFactory::create(FormatterType::Json).format(&response.dependencies)
}
