use super::clip::Clip;
use crate::error::{ShuffleError, ShuffleResult};
use crate::tools::containing_directory;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ordered clip list in the concat demuxer's `file '<path>'` format.
#[derive(Debug, Clone)]
pub struct ConcatManifest {
    entries: Vec<PathBuf>,
}

impl ConcatManifest {
    /// Builds the manifest from clips already in play order.
    ///
    /// Paths are made absolute: the demuxer resolves relative entries against
    /// the manifest's own directory, not the working directory.
    pub fn from_clips(clips: &[Clip]) -> ShuffleResult<Self> {
        let entries = clips
            .iter()
            .map(|clip| {
                fs::canonicalize(&clip.path).map_err(|e| {
                    ShuffleError::io(format!("Failed to resolve clip {}", clip.path.display()), e)
                })
            })
            .collect::<ShuffleResult<Vec<_>>>()?;

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|path| format!("file {}\n", quote(path)))
            .collect()
    }

    /// Writes the manifest to a hidden temp file beside `output_file`.
    ///
    /// The file is deleted when the returned handle is dropped or closed.
    pub fn write_near(&self, output_file: &Path) -> ShuffleResult<NamedTempFile> {
        let directory = containing_directory(output_file);

        let mut file = tempfile::Builder::new()
            .prefix(".concat-")
            .suffix(".txt")
            .tempfile_in(directory)
            .map_err(|e| {
                ShuffleError::io(
                    format!("Failed to create concat manifest in {}", directory.display()),
                    e,
                )
            })?;

        file.write_all(self.render().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| ShuffleError::io("Failed to write concat manifest", e))?;

        Ok(file)
    }
}

/// Single-quotes a path; embedded quotes become `'\''`.
fn quote(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', r"'\''"))
}
