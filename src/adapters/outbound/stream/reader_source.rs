use crate::ports::outbound::InputSource;
use crate::shared::error::GovError;
use crate::shared::Result;
use std::io::{BufRead, BufReader, Read};

/// ReaderSource adapter wrapping any caller-supplied reader
///
/// Useful for library callers that already hold the `go version -v -m`
/// output in memory or behind a pipe. The reader is handed out once.
pub struct ReaderSource<R> {
    reader: Option<R>,
    label: String,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_label(reader, "reader")
    }

    /// Same as [`ReaderSource::new`] with a custom name for messages
    pub fn with_label(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader: Some(reader),
            label: label.into(),
        }
    }
}

impl<R: Read> InputSource for ReaderSource<R> {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        let reader = self.reader.take().ok_or_else(|| {
            GovError::configuration(format!("input {} was already consumed", self.label))
        })?;
        Ok(Box::new(BufReader::new(reader)))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
