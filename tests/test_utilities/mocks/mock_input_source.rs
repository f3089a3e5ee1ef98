use govdeps::prelude::*;
use std::io::{BufRead, Cursor};

/// Mock InputSource for testing
pub struct MockInputSource {
    pub content: String,
    pub should_fail: bool,
    pub open_count: usize,
}

impl MockInputSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            open_count: 0,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
            open_count: 0,
        }
    }
}

impl InputSource for MockInputSource {
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        self.open_count += 1;
        if self.should_fail {
            anyhow::bail!("Mock input open failure");
        }
        Ok(Box::new(Cursor::new(self.content.as_bytes())))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
