use std::path::PathBuf;

/// A video file on disk. `position` is assigned once a shuffle plan is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub path: PathBuf,
    pub position: Option<usize>,
}

impl Clip {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            position: None,
        }
    }
}

impl From<PathBuf> for Clip {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
