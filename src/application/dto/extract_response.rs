use crate::dependency_extraction::domain::Dependency;

/// ExtractResponse - result of a successful extraction run
///
/// Holds the full collection in input order; a failed run never produces one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResponse {
    pub dependencies: Vec<Dependency>,
}

impl ExtractResponse {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    pub fn into_dependencies(self) -> Vec<Dependency> {
        self.dependencies
    }
}
