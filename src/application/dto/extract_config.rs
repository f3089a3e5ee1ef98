use crate::shared::error::GovError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ExtractConfig - validated configuration for one extraction run
///
/// Built through [`ExtractConfig::builder`]; every field is optional and
/// `build()` rejects combinations that cannot work before any input is
/// touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractConfig {
    input_files: Vec<PathBuf>,
    output_path: Option<PathBuf>,
    pretty: bool,
    verbose: bool,
}

impl ExtractConfig {
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::default()
    }

    /// Input files in concatenation order; empty means standard input
    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }

    pub fn reads_stdin(&self) -> bool {
        self.input_files.is_empty()
    }

    /// Output file; `None` means standard output
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder for [`ExtractConfig`]
#[derive(Debug, Default)]
pub struct ExtractConfigBuilder {
    input_files: Vec<PathBuf>,
    output_path: Option<PathBuf>,
    pretty: bool,
    verbose: bool,
}

impl ExtractConfigBuilder {
    pub fn input_files(mut self, files: Vec<PathBuf>) -> Self {
        self.input_files = files;
        self
    }

    pub fn input_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.input_files.push(file.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates and builds the configuration
    ///
    /// # Errors
    /// Returns [`GovError::Configuration`] if:
    /// - An input path is empty
    /// - The output path is empty
    ///
    /// The output may name one of the inputs: all input is read before
    /// anything is written.
    pub fn build(self) -> Result<ExtractConfig> {
        if let Some(index) = self
            .input_files
            .iter()
            .position(|p| p.as_os_str().is_empty())
        {
            return Err(
                GovError::configuration(format!("input path #{} is empty", index + 1)).into(),
            );
        }

        if let Some(output) = &self.output_path {
            if output.as_os_str().is_empty() {
                return Err(GovError::configuration("output path is empty").into());
            }
        }

        Ok(ExtractConfig {
            input_files: self.input_files,
            output_path: self.output_path,
            pretty: self.pretty,
            verbose: self.verbose,
        })
    }
}
