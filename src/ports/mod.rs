/// Ports module defining the interfaces between the application core
/// and the outside world (input streams, output sinks, console).
pub mod outbound;
