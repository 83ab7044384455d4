//! Data models for Resolution Roulette

mod resolution;

pub use resolution::{Resolution, ResolutionId};
