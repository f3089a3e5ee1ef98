use serde::Serialize;

/// Dependency value object: one Go module listed by `go version -v -m`
///
/// All three fields are opaque strings taken verbatim from the input line.
/// Serializes with the keys `name`, `version`, `digest` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    name: String,
    version: String,
    digest: String,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            digest: digest.into(),
        }
    }

    /// Module path, e.g. `cel.dev/expr`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Content hash, e.g. `h1:...=`
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
