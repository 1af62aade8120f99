/// Use cases module containing application business logic orchestration
mod build_patterns;

pub use build_patterns::BuildPatternsUseCase;
