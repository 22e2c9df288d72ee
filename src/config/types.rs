use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DETECTOR_PROGRAM: &str = "scenedetect";
pub const DEFAULT_CONCAT_PROGRAM: &str = "ffmpeg";
pub const DEFAULT_CLIP_EXTENSION: &str = "mp4";
pub const DEFAULT_SCENE_MARKER: &str = "Scene-";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_shuffled";
pub const DEFAULT_SCENES_DIR_NAME: &str = "scenes";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// User-tunable settings, read from a JSON file when `--config` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detector_program: PathBuf,
    pub concat_program: PathBuf,
    pub clip_extension: String,
    pub scene_marker: String,
    pub detection_threshold: Option<f64>,
    pub output_suffix: String,
    pub scenes_dir_name: String,
    pub scratch_root: Option<PathBuf>,
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            detector_program: PathBuf::from(DEFAULT_DETECTOR_PROGRAM),
            concat_program: PathBuf::from(DEFAULT_CONCAT_PROGRAM),
            clip_extension: DEFAULT_CLIP_EXTENSION.to_string(),
            scene_marker: DEFAULT_SCENE_MARKER.to_string(),
            detection_threshold: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            scenes_dir_name: DEFAULT_SCENES_DIR_NAME.to_string(),
            scratch_root: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    #[must_use]
    pub const fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.settings.poll_interval_ms)
    }

    /// Case-insensitive match against the accepted clip extension.
    #[must_use]
    pub fn is_clip_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.settings.clip_extension))
    }
}
