use crate::config::Config;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Boundary detector invocation: content-based detection, one file per scene.
pub struct DetectorCommand {
    program: PathBuf,
    source_path: PathBuf,
    destination_directory: PathBuf,
    threshold: Option<f64>,
}

impl DetectorCommand {
    #[must_use]
    pub fn new(config: &Config, source_path: &Path, destination_directory: &Path) -> Self {
        Self {
            program: config.settings.detector_program.clone(),
            source_path: source_path.to_path_buf(),
            destination_directory: destination_directory.to_path_buf(),
            threshold: config.settings.detection_threshold,
        }
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);

        cmd.arg("--quiet");
        cmd.arg("-i").arg(&self.source_path);
        cmd.arg("-o").arg(&self.destination_directory);
        cmd.arg("detect-content");
        if let Some(threshold) = self.threshold {
            cmd.args(["--threshold", &threshold.to_string()]);
        }
        cmd.arg("split-video");

        cmd
    }
}
