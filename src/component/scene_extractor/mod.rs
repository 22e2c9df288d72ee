//! Scene extraction
//!
//! Hands the source video to the external boundary detector, which writes one
//! clip per content-based scene, then collects the produced clips.

mod detector_command;
mod main;

pub use detector_command::DetectorCommand;
pub use main::{SceneExtractor, find_scene_clips};
