use super::clip::Clip;
use super::concat_command::ConcatCommand;
use super::concat_manifest::ConcatManifest;
use super::shuffle_plan::ShufflePlan;
use crate::config::Config;
use crate::error::{ShuffleError, ShuffleResult};
use crate::tools::{
    ScanDepth, containing_directory, ensure_parent_exists, run_external, scan_clips,
};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct ShuffleReport {
    pub output: PathBuf,
    /// Clips in output order, positions assigned.
    pub order: Vec<Clip>,
}

impl ShuffleReport {
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.order.len()
    }
}

/// Concatenates every clip under a directory in random order.
pub struct ClipShuffler<'a> {
    config: &'a Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl<'a> ClipShuffler<'a> {
    pub const fn new(config: &'a Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn shuffle(
        &self,
        source_directory: &Path,
        output_file: &Path,
    ) -> ShuffleResult<ShuffleReport> {
        self.shuffle_with_plan(source_directory, output_file, ShufflePlan::generate)
    }

    /// Like [`shuffle`](Self::shuffle) with a caller-supplied plan generator.
    pub fn shuffle_with_plan(
        &self,
        source_directory: &Path,
        output_file: &Path,
        make_plan: impl FnOnce(usize) -> ShufflePlan,
    ) -> ShuffleResult<ShuffleReport> {
        if output_file.is_dir() {
            return Err(ShuffleError::InvalidUsage(format!(
                "output {} is a directory, expected a file path",
                output_file.display()
            )));
        }

        let clips = self.enumerate(source_directory, output_file);
        if clips.is_empty() {
            return Err(ShuffleError::NoClipsFound(source_directory.to_path_buf()));
        }
        info!(
            "found {} clips under {}",
            clips.len(),
            source_directory.display()
        );

        let plan = make_plan(clips.len());
        if plan.len() != clips.len() {
            return Err(ShuffleError::InvalidUsage(format!(
                "shuffle plan covers {} clips, found {}",
                plan.len(),
                clips.len()
            )));
        }
        debug!("shuffle plan: {:?}", plan.order());

        let order = plan.arrange(clips);
        self.concatenate(&order, output_file)?;

        info!("wrote {} clips to {}", order.len(), output_file.display());
        Ok(ShuffleReport {
            output: output_file.to_path_buf(),
            order,
        })
    }

    /// Recursive scan; the output file is left out if it sits under the source.
    fn enumerate(&self, source_directory: &Path, output_file: &Path) -> Vec<Clip> {
        let output = fs::canonicalize(output_file).ok();

        scan_clips(source_directory, self.config, ScanDepth::Recursive)
            .into_iter()
            .filter(|path| {
                output
                    .as_ref()
                    .is_none_or(|output| fs::canonicalize(path).ok().as_ref() != Some(output))
            })
            .map(Clip::new)
            .collect()
    }

    /// Concatenates into a hidden sibling of `output_file` and moves it into
    /// place only on success, so a failed or interrupted run never touches an
    /// existing file at `output_file`.
    fn concatenate(&self, order: &[Clip], output_file: &Path) -> ShuffleResult<()> {
        ensure_parent_exists(output_file)?;

        let manifest = ConcatManifest::from_clips(order)?;
        let manifest_file = manifest.write_near(output_file)?;
        debug!("concat manifest at {}", manifest_file.path().display());

        let staging = self.staging_file(output_file)?;
        let command =
            ConcatCommand::new(self.config, manifest_file.path(), staging.path()).build_command();
        let result = run_external(
            command,
            "Concatenating clips",
            &self.shutdown_signal,
            self.config.poll_interval(),
        );

        if let Err(e) = manifest_file.close() {
            warn!("Failed to remove concat manifest: {e}");
        }

        let outcome = result?;
        if !outcome.success() {
            return Err(ShuffleError::ConcatenationFailed(outcome.failure_summary()));
        }

        let written = fs::metadata(staging.path()).map_or(0, |meta| meta.len());
        if written == 0 {
            return Err(ShuffleError::ConcatenationFailed(format!(
                "no output written for {}",
                output_file.display()
            )));
        }

        staging.persist(output_file).map_err(|e| {
            ShuffleError::io(
                format!("Failed to move output into {}", output_file.display()),
                e.error,
            )
        })?;
        Ok(())
    }

    /// Empty temp file beside `output_file`, removed unless persisted.
    ///
    /// Keeps the output's extension so the concatenator picks the same
    /// container format.
    fn staging_file(&self, output_file: &Path) -> ShuffleResult<NamedTempFile> {
        let extension = output_file
            .extension()
            .map_or_else(|| self.config.settings.clip_extension.clone(), |ext| {
                ext.to_string_lossy().into_owned()
            });
        let directory = containing_directory(output_file);

        tempfile::Builder::new()
            .prefix(".shuffle-")
            .suffix(&format!(".{extension}"))
            .tempfile_in(directory)
            .map_err(|e| {
                ShuffleError::io(
                    format!("Failed to create output file in {}", directory.display()),
                    e,
                )
            })
    }
}
