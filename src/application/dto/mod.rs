/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod extract_config;
mod extract_response;

pub use extract_config::{ExtractConfig, ExtractConfigBuilder};
pub use extract_response::ExtractResponse;
