//! Pipeline components
//!
//! Each submodule owns one step and its dedicated helpers.

pub mod clip_shuffler;
pub mod pipeline;
pub mod scene_extractor;

pub use clip_shuffler::ClipShuffler;
pub use pipeline::Pipeline;
pub use scene_extractor::SceneExtractor;
