use crate::config::Config;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDepth {
    /// Only direct children of the directory.
    Flat,
    Recursive,
}

/// Lists clip files (accepted extension) under `directory`, sorted by path.
///
/// Symlinks are not followed and unreadable entries are skipped.
#[must_use]
pub fn scan_clips(directory: &Path, config: &Config, depth: ScanDepth) -> Vec<PathBuf> {
    let walker = match depth {
        ScanDepth::Flat => WalkDir::new(directory).max_depth(1),
        ScanDepth::Recursive => WalkDir::new(directory),
    };

    let mut clips: Vec<PathBuf> = walker
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| config.is_clip_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    clips.sort();
    clips
}
