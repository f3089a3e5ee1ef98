use crate::dependency_extraction::domain::Dependency;
use crate::shared::Result;

/// DependencyFormatter port for rendering the parsed collection
pub trait DependencyFormatter {
    /// Formats the dependencies in collection order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, dependencies: &[Dependency]) -> Result<String>;
}
