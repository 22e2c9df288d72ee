mod clip_scanner;
mod dependency_prober;
mod external_command;
mod path_validator;

pub use clip_scanner::{ScanDepth, scan_clips};
pub use dependency_prober::{Capability, probe, require};
pub use external_command::{CommandOutcome, run_external};
pub use path_validator::{
    containing_directory, ensure_directory_exists, ensure_parent_exists, is_missing_or_empty_dir,
    resolve_location, validate_source_file,
};
