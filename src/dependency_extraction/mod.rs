/// Domain layer - the dependency record and the pure parsing services
///
/// Nothing in this layer opens files or touches process streams; the
/// aggregator only sees a `BufRead` handed to it by the application layer.
pub mod domain;
pub mod services;
