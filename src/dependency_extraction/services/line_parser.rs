use crate::dependency_extraction::domain::Dependency;
use crate::shared::error::GovError;
use crate::shared::Result;

/// Leading token of every dependency line in `go version -v -m` output
pub const DEP_MARKER: &str = "dep";

/// LineParser service for single `dep` lines
///
/// Pure logic, no I/O. A payload line has the shape
/// `dep<TAB>name<TAB>version<TAB>digest`; tokenization is on any whitespace
/// so the four-token count is the only structural rule.
pub struct LineParser;

impl LineParser {
    /// Returns true when an already trimmed line carries the `dep` marker
    /// and must go through [`LineParser::parse`].
    ///
    /// The check is a plain prefix match, so `depfoo ...` is a candidate too
    /// and will be rejected by `parse`.
    pub fn is_candidate(line: &str) -> bool {
        line.starts_with(DEP_MARKER)
    }

    /// Parses one trimmed line into a [`Dependency`]
    ///
    /// # Errors
    /// Returns [`GovError::MalformedLine`] if the line does not split into
    /// exactly four tokens or the first token is not `dep`.
    pub fn parse(line: &str) -> Result<Dependency> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [DEP_MARKER, name, version, digest] => Ok(Dependency::new(*name, *version, *digest)),
            _ => Err(GovError::MalformedLine {
                line: line.to_string(),
                tokens: tokens.len(),
            }
            .into()),
        }
    }
}
