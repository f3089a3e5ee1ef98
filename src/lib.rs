//! govdeps - Go dependency extraction from `go version -v -m` output
//!
//! This library reads the build info printed by `go version -v -m <binary>`,
//! picks out the `dep` lines and renders the dependencies as JSON:
//!
//! ```text
//! [{"name":"cel.dev/expr","version":"v0.19.1","digest":"h1:NciYrtDRIR0lNCnH1LFJegdjspNx9fI59O7TWcua/W4="}]
//! ```
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_extraction`): the `Dependency` record, the line parser
//!   and the stream aggregator
//! - **Application Layer** (`application`): use case, configuration and factories
//! - **Ports** (`ports`): interfaces for input sources, formatters, presenters and progress
//! - **Adapters** (`adapters`): stdin, files, readers, JSON, stdout/file output, stderr
//! - **Shared** (`shared`): error types and the crate-wide `Result`
//!
//! # Example
//!
//! ```
//! use govdeps::prelude::*;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<()> {
//! let output = "app: go1.24.1\n\tdep\tcel.dev/expr\tv0.19.1\th1:NciYrtDRIR0lNCnH1LFJegdjspNx9fI59O7TWcua/W4=\n";
//!
//! let mut use_case = ExtractDependenciesUseCase::new(
//!     ReaderSource::new(Cursor::new(output)),
//!     StderrProgressReporter::quiet(),
//! );
//! let response = use_case.execute()?;
//!
//! let json = JsonFormatter::new().format(&response.dependencies)?;
//! assert_eq!(
//!     json,
//!     r#"[{"name":"cel.dev/expr","version":"v0.19.1","digest":"h1:NciYrtDRIR0lNCnH1LFJegdjspNx9fI59O7TWcua/W4="}]"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_extraction;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::stream::{ReaderSource, StdinSource};
    pub use crate::application::dto::{ExtractConfig, ExtractConfigBuilder, ExtractResponse};
    pub use crate::application::factories::{
        FormatterFactory, FormatterType, PresenterFactory, PresenterType, SourceFactory,
    };
    pub use crate::application::use_cases::{
        parse_dependencies, parse_dependencies_from, ExtractDependenciesUseCase,
    };
    pub use crate::dependency_extraction::domain::Dependency;
    pub use crate::dependency_extraction::services::{LineParser, StreamAggregator, DEP_MARKER};
    pub use crate::ports::outbound::{
        DependencyFormatter, InputSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, GovError};
    pub use crate::shared::Result;
}
