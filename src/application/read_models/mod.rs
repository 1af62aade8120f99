//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that flatten a
//! build-patterns response into what the formatters render.

mod pattern_read_model;
mod pattern_read_model_builder;

pub use pattern_read_model::{GroupView, LockfileView, ModuleMatchView, PatternReadModel};
pub use pattern_read_model_builder::PatternReadModelBuilder;
