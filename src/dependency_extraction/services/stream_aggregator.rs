use crate::dependency_extraction::domain::Dependency;
use crate::dependency_extraction::services::LineParser;
use crate::shared::error::GovError;
use crate::shared::Result;
use std::io::BufRead;

/// StreamAggregator service turning a line stream into dependency records
///
/// One sequential pass: lines without the `dep` marker are skipped, every
/// marker line must parse. The first malformed line or read failure aborts
/// the pass and nothing collected so far is returned.
pub struct StreamAggregator;

impl StreamAggregator {
    /// Reads `reader` to the end and collects every `dep` line in order
    ///
    /// # Arguments
    /// * `reader` - The (possibly concatenated) input stream
    /// * `source_name` - Description of the stream used in read errors
    ///
    /// # Errors
    /// Returns [`GovError::MalformedLine`] for the first unparsable `dep` line
    /// and [`GovError::InputRead`] if the underlying reader fails.
    pub fn aggregate<R: BufRead>(mut reader: R, source_name: &str) -> Result<Vec<Dependency>> {
        let mut dependencies = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| GovError::InputRead {
                    source_name: source_name.to_string(),
                    details: e.to_string(),
                })?;
            if read == 0 {
                break;
            }

            // go version output is UTF-8; stray bytes in unrelated lines must not abort the run
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim();
            if !LineParser::is_candidate(line) {
                continue;
            }

            dependencies.push(LineParser::parse(line)?);
        }

        Ok(dependencies)
    }
}
