use crate::shared::Result;
use std::io::BufRead;

/// InputSource port for the text the aggregator consumes
///
/// A source hands out one buffered reader per run. Whatever it opens
/// (files, process streams) is owned by the returned reader and released
/// when that reader is dropped.
pub trait InputSource {
    /// Opens the source for a single aggregation pass
    ///
    /// # Errors
    /// Returns an error if:
    /// - A named file does not exist or is a directory
    /// - The source was already consumed
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>>;

    /// Human-readable name used in progress messages and read errors
    fn describe(&self) -> String;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        (**self).open()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        (**self).open()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
