use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// A quiet reporter swallows every message.
pub struct StderrProgressReporter {
    enabled: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn quiet() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.enabled {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if self.enabled {
            eprintln!("{}", message);
        }
    }
}
