use crate::config::Config;
use crate::error::{ShuffleError, ShuffleResult};
use crate::tools::{ensure_directory_exists, is_missing_or_empty_dir};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

/// Where intermediate clips live for one pipeline run.
///
/// `Private` is removed when dropped, so every exit path (error, interrupt,
/// unwinding) releases it. `Retained` is left on disk for the caller.
#[derive(Debug)]
pub enum Scratch {
    Private(TempDir),
    Retained(PathBuf),
}

impl Scratch {
    pub fn allocate(config: &Config, output_file: &Path, keep: bool) -> ShuffleResult<Self> {
        if keep {
            let directory = retained_location(config, output_file);
            ensure_directory_exists(&directory)?;
            info!("keeping scene clips in {}", directory.display());
            return Ok(Self::Retained(directory));
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix("scene-shuffle-");
        let temp_dir = match &config.settings.scratch_root {
            Some(root) => {
                ensure_directory_exists(root)?;
                builder.tempdir_in(root)
            }
            None => builder.tempdir(),
        }
        .map_err(|e| ShuffleError::io("Failed to create scratch directory", e))?;

        Ok(Self::Private(temp_dir))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Private(temp_dir) => temp_dir.path(),
            Self::Retained(path) => path,
        }
    }

    #[must_use]
    pub const fn is_retained(&self) -> bool {
        matches!(self, Self::Retained(_))
    }

    /// Removes a private directory now; returns the retained location, if any.
    pub fn finish(self) -> Option<PathBuf> {
        match self {
            Self::Private(temp_dir) => {
                let path = temp_dir.path().to_path_buf();
                if let Err(e) = temp_dir.close() {
                    warn!("Failed to remove scratch directory {}: {e}", path.display());
                }
                None
            }
            Self::Retained(path) => Some(path),
        }
    }
}

/// `<output dir>/<scenes_dir_name>`, or a unique sibling when that is taken.
fn retained_location(config: &Config, output_file: &Path) -> PathBuf {
    let parent = match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = &config.settings.scenes_dir_name;

    let preferred = parent.join(name);
    if is_missing_or_empty_dir(&preferred) {
        return preferred;
    }

    let suffix = Uuid::new_v4().simple().to_string();
    parent.join(format!("{name}-{}", &suffix[..8]))
}
