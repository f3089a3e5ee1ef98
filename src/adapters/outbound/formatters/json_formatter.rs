use crate::dependency_extraction::domain::Dependency;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering a JSON array of
/// `{"name", "version", "digest"}` objects
///
/// Compact output is byte-for-byte `serde_json` compact form; an empty
/// collection is `[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, dependencies: &[Dependency]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dependencies)
        } else {
            serde_json::to_string(dependencies)
        };
        json.map_err(|e| anyhow::anyhow!("Failed to serialize dependencies to JSON: {}", e))
    }
}
