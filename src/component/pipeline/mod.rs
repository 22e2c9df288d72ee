//! Full pipeline: scene extraction followed by shuffling, with a scratch
//! directory that is either private (always removed) or retained.

mod main;
mod scratch;
mod stage;

pub use main::{Pipeline, PipelineReport, default_output_path};
pub use scratch::Scratch;
pub use stage::PipelineStage;
