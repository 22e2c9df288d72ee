//! Clip shuffling
//!
//! Scan clips, draw a uniform permutation, write a concat manifest in that
//! order and let the concatenator stream-copy everything into one file.
//! Clips with mismatched codecs or resolutions make the concatenator fail;
//! nothing is re-encoded to work around it.

mod clip;
mod concat_command;
mod concat_manifest;
mod main;
mod shuffle_plan;

pub use clip::Clip;
pub use concat_command::ConcatCommand;
pub use concat_manifest::ConcatManifest;
pub use main::{ClipShuffler, ShuffleReport};
pub use shuffle_plan::ShufflePlan;
