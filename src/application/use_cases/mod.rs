/// Use cases module containing application business logic orchestration
mod extract_dependencies;

pub use extract_dependencies::{
    parse_dependencies, parse_dependencies_from, ExtractDependenciesUseCase,
};
