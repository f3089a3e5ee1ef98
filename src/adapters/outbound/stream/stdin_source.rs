use crate::ports::outbound::InputSource;
use crate::shared::Result;
use std::io::{self, BufRead};

/// StdinSource adapter reading the process standard input
///
/// The stdin lock is held by the returned reader for the whole pass.
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinSource {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(io::stdin().lock()))
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}
