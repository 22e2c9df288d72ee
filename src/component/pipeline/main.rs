use super::scratch::Scratch;
use super::stage::PipelineStage;
use crate::component::clip_shuffler::ClipShuffler;
use crate::component::scene_extractor::SceneExtractor;
use crate::config::Config;
use crate::error::{ShuffleError, ShuffleResult};
use crate::tools::{resolve_location, validate_source_file};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Debug)]
pub struct PipelineReport {
    pub output: PathBuf,
    pub clip_count: usize,
    pub retained_scenes: Option<PathBuf>,
}

/// Split a video into scenes, then shuffle them into one file.
pub struct Pipeline<'a> {
    config: &'a Config,
    shutdown_signal: Arc<AtomicBool>,
    stage: PipelineStage,
}

impl<'a> Pipeline<'a> {
    pub const fn new(config: &'a Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
            stage: PipelineStage::Init,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Any component failure short-circuits and is returned unchanged. The
    /// scratch guard is dropped on the way out, so a private scratch
    /// directory never survives the call.
    pub fn run_full(
        &mut self,
        source_path: &Path,
        output_file: &Path,
        keep_intermediate_clips: bool,
    ) -> ShuffleResult<PipelineReport> {
        self.stage = PipelineStage::Init;
        if let Err(e) = validate_source_file(source_path) {
            return self.fail(e);
        }
        if writes_over_source(source_path, output_file) {
            return self.fail(ShuffleError::InvalidUsage(format!(
                "output {} is the source video",
                output_file.display()
            )));
        }

        let scratch = match Scratch::allocate(self.config, output_file, keep_intermediate_clips) {
            Ok(scratch) => scratch,
            Err(e) => return self.fail(e),
        };
        debug!("scratch directory: {}", scratch.path().display());

        self.advance(PipelineStage::Extracting);
        let extractor = SceneExtractor::new(self.config, Arc::clone(&self.shutdown_signal));
        let clips = match extractor.extract(source_path, scratch.path()) {
            Ok(clips) => clips,
            Err(e) => return self.fail(e),
        };

        self.advance(PipelineStage::Shuffling);
        let shuffler = ClipShuffler::new(self.config, Arc::clone(&self.shutdown_signal));
        let report = match shuffler.shuffle(scratch.path(), output_file) {
            Ok(report) => report,
            Err(e) => return self.fail(e),
        };

        self.advance(if scratch.is_retained() {
            PipelineStage::Preserve
        } else {
            PipelineStage::Cleanup
        });
        let retained_scenes = scratch.finish();

        self.advance(PipelineStage::Done);
        info!(
            "pipeline finished: {} scenes -> {}",
            clips.len(),
            report.output.display()
        );

        Ok(PipelineReport {
            output: report.output,
            clip_count: report.order.len(),
            retained_scenes,
        })
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "bad transition {} -> {next}",
            self.stage
        );
        debug!("pipeline stage: {} -> {next}", self.stage);
        self.stage = next;
    }

    fn fail<T>(&mut self, error: ShuffleError) -> ShuffleResult<T> {
        error!("pipeline failed while {}: {error}", self.stage);
        self.advance(PipelineStage::Failed);
        Err(error)
    }
}

/// True when `output_file` names the same file as `source_path`, through
/// `..` components, relative paths or symlinks included.
fn writes_over_source(source_path: &Path, output_file: &Path) -> bool {
    match (resolve_location(source_path), resolve_location(output_file)) {
        (Some(source), Some(output)) => source == output,
        _ => source_path == output_file,
    }
}

/// `<dir>/<stem><suffix>.<clip extension>` beside the source video.
#[must_use]
pub fn default_output_path(source_path: &Path, config: &Config) -> PathBuf {
    let stem = source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source_path.parent().unwrap_or(Path::new(""));
    parent.join(format!(
        "{stem}{}.{}",
        config.settings.output_suffix, config.settings.clip_extension
    ))
}
