use crate::adapters::outbound::filesystem::FileSystemSource;
use crate::adapters::outbound::stream::StdinSource;
use crate::ports::outbound::InputSource;
use std::path::PathBuf;

/// Factory for creating input sources
pub struct SourceFactory;

impl SourceFactory {
    /// Standard input when `files` is empty, the concatenated files otherwise
    pub fn create(files: Vec<PathBuf>) -> Box<dyn InputSource> {
        if files.is_empty() {
            Box::new(StdinSource::new())
        } else {
            Box::new(FileSystemSource::new(files))
        }
    }
}
