use super::detector_command::DetectorCommand;
use crate::config::Config;
use crate::error::{ShuffleError, ShuffleResult};
use crate::tools::{
    ScanDepth, ensure_directory_exists, run_external, scan_clips, validate_source_file,
};
use log::{debug, info};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Splits a source video into one clip per detected scene.
pub struct SceneExtractor<'a> {
    config: &'a Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl<'a> SceneExtractor<'a> {
    pub const fn new(config: &'a Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    /// Runs the detector and returns the produced clip paths, sorted.
    ///
    /// The source is checked before anything is created on disk. Partial
    /// output is left in `destination_directory` on failure.
    pub fn extract(
        &self,
        source_path: &Path,
        destination_directory: &Path,
    ) -> ShuffleResult<Vec<PathBuf>> {
        validate_source_file(source_path)?;
        ensure_directory_exists(destination_directory)?;

        info!(
            "detecting scenes: {} -> {}",
            source_path.display(),
            destination_directory.display()
        );

        let command =
            DetectorCommand::new(self.config, source_path, destination_directory).build_command();
        let outcome = run_external(
            command,
            "Detecting scenes",
            &self.shutdown_signal,
            self.config.poll_interval(),
        )?;

        if !outcome.success() {
            return Err(ShuffleError::DetectionFailed(outcome.failure_summary()));
        }

        let clips = find_scene_clips(destination_directory, self.config)?;
        if clips.is_empty() {
            return Err(ShuffleError::DetectionFailed(format!(
                "no scene clips were produced in {}",
                destination_directory.display()
            )));
        }

        info!("extracted {} scene clips", clips.len());
        Ok(clips)
    }
}

/// Clips in `directory` (flat) whose name carries the detector's scene marker.
pub fn find_scene_clips(directory: &Path, config: &Config) -> ShuffleResult<Vec<PathBuf>> {
    let pattern = scene_name_pattern(config)?;

    let clips: Vec<PathBuf> = scan_clips(directory, config, ScanDepth::Flat)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.is_match(name))
        })
        .collect();

    debug!(
        "{} files in {} match the scene naming",
        clips.len(),
        directory.display()
    );
    Ok(clips)
}

fn scene_name_pattern(config: &Config) -> ShuffleResult<Regex> {
    let pattern = format!(
        r"(?i){}\d+\.{}$",
        regex::escape(&config.settings.scene_marker),
        regex::escape(&config.settings.clip_extension)
    );
    Regex::new(&pattern).map_err(|e| ShuffleError::InvalidUsage(format!("bad scene marker: {e}")))
}
