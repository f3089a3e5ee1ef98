/// ProgressReporter port for reporting progress during a run
///
/// Messages go to a side channel (stderr) so they never mix with the
/// JSON document on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
