use crate::config::Config;
use crate::error::{ShuffleError, ShuffleResult};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// External capabilities the pipeline relies on.
///
/// Randomness is generated in-process, so it never needs probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    SceneDetector,
    Concatenator,
}

impl Capability {
    #[must_use]
    pub fn program<'a>(&self, config: &'a Config) -> &'a Path {
        match self {
            Self::SceneDetector => &config.settings.detector_program,
            Self::Concatenator => &config.settings.concat_program,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SceneDetector => write!(f, "scene detector"),
            Self::Concatenator => write!(f, "concatenator"),
        }
    }
}

/// Returns the subset of `required` whose program cannot be resolved.
#[must_use]
pub fn probe(config: &Config, required: &[Capability]) -> BTreeSet<Capability> {
    required
        .iter()
        .copied()
        .filter(|capability| {
            let program = capability.program(config);
            match which::which(program) {
                Ok(resolved) => {
                    debug!("{capability} found at {}", resolved.display());
                    false
                }
                Err(_) => {
                    warn!("{capability} not found: {}", program.display());
                    true
                }
            }
        })
        .collect()
}

/// Fails with `MissingDependency` naming every unresolved program.
pub fn require(config: &Config, required: &[Capability]) -> ShuffleResult<()> {
    let missing = probe(config, required);
    if missing.is_empty() {
        return Ok(());
    }

    let names = missing
        .iter()
        .map(|capability| {
            format!(
                "{} ({capability})",
                capability.program(config).display()
            )
        })
        .collect();
    Err(ShuffleError::MissingDependency(names))
}
