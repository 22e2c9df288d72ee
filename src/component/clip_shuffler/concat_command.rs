use crate::config::Config;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Stream-copy concatenation of a manifest into one container.
pub struct ConcatCommand {
    program: PathBuf,
    manifest_path: PathBuf,
    output_path: PathBuf,
}

impl ConcatCommand {
    #[must_use]
    pub fn new(config: &Config, manifest_path: &Path, output_path: &Path) -> Self {
        Self {
            program: config.settings.concat_program.clone(),
            manifest_path: manifest_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);

        cmd.args([
            "-hide_banner",
            "-nostdin",
            "-loglevel", "error",
            "-f", "concat",
            "-safe", "0",
        ]);
        cmd.arg("-i").arg(&self.manifest_path);
        cmd.args(["-c", "copy", "-y"]);
        cmd.arg(&self.output_path);

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_build_command_stream_copy() {
        let config = Config::default();
        let cmd = ConcatCommand::new(&config, Path::new("/tmp/list.txt"), Path::new("/out/x.mp4"))
            .build_command();
        let args: Vec<&OsStr> = cmd.get_args().collect();

        assert_eq!(cmd.get_program(), OsStr::new("ffmpeg"));
        let input = args.iter().position(|a| *a == OsStr::new("-i")).unwrap();
        assert_eq!(args[input + 1], OsStr::new("/tmp/list.txt"));
        let format = args.iter().position(|a| *a == OsStr::new("-f")).unwrap();
        assert_eq!(args[format + 1], OsStr::new("concat"));
        let codec = args.iter().position(|a| *a == OsStr::new("-c")).unwrap();
        assert_eq!(args[codec + 1], OsStr::new("copy"));
        assert_eq!(args.last(), Some(&OsStr::new("/out/x.mp4")));
    }
}
