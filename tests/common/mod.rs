//! Stand-in executables for the scene detector and the concatenator.
//!
//! The fake detector reads a scene count from the "video" file and writes
//! that many `<stem>-Scene-NNN.mp4` clips. The fake concatenator writes the
//! manifest's clip paths, one per line, into the output file, so a test can
//! read back exactly which clips were concatenated and in which order.
#![allow(dead_code)]

use scene_shuffle::config::{Config, Settings};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

const FAKE_DETECTOR: &str = r#"#!/bin/sh
input=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -i) input="$2"; shift 2 ;;
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
[ -f "$input" ] || { echo "cannot open $input" >&2; exit 2; }
count=$(cat "$input")
stem=$(basename "$input" | sed 's/\.[^.]*$//')
mkdir -p "$out"
i=1
while [ "$i" -le "$count" ]; do
  printf 'scene %s\n' "$i" > "$out/$stem-Scene-$(printf '%03d' "$i").mp4"
  i=$((i + 1))
done
"#;

const FAILING_DETECTOR: &str = r#"#!/bin/sh
echo "VideoOpenFailure: could not decode stream" >&2
exit 3
"#;

const HANGING_DETECTOR: &str = "#!/bin/sh\nexec sleep 30\n";

const FAKE_CONCAT: &str = r#"#!/bin/sh
manifest=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -i) manifest="$2"; shift 2 ;;
    *) out="$1"; shift ;;
  esac
done
sed -n "s/^file '\(.*\)'\$/\1/p" "$manifest" > "$out"
"#;

const FAILING_CONCAT: &str = r#"#!/bin/sh
out=""
for arg in "$@"; do out="$arg"; done
echo "partial" > "$out"
echo "Non-monotonous DTS in output stream" >&2
exit 1
"#;

const SILENT_FAILING_CONCAT: &str = r#"#!/bin/sh
echo "Invalid data found when processing input" >&2
exit 1
"#;

pub struct FakeTools {
    _dir: TempDir,
    pub detector: PathBuf,
    pub failing_detector: PathBuf,
    pub hanging_detector: PathBuf,
    pub concat: PathBuf,
    pub failing_concat: PathBuf,
    pub silent_failing_concat: PathBuf,
}

/// Writes every script once per test binary.
///
/// Scripts are created before any test spawns a process so no forked child
/// can still hold a script open for writing when it is executed.
pub fn tools() -> &'static FakeTools {
    static TOOLS: OnceLock<FakeTools> = OnceLock::new();
    TOOLS.get_or_init(|| {
        let dir = TempDir::new().unwrap();
        let detector = write_script(dir.path(), "scenedetect", FAKE_DETECTOR);
        let failing_detector = write_script(dir.path(), "scenedetect-fail", FAILING_DETECTOR);
        let hanging_detector = write_script(dir.path(), "scenedetect-hang", HANGING_DETECTOR);
        let concat = write_script(dir.path(), "ffmpeg", FAKE_CONCAT);
        let failing_concat = write_script(dir.path(), "ffmpeg-fail", FAILING_CONCAT);
        let silent_failing_concat =
            write_script(dir.path(), "ffmpeg-fail-early", SILENT_FAILING_CONCAT);
        FakeTools {
            _dir: dir,
            detector,
            failing_detector,
            hanging_detector,
            concat,
            failing_concat,
            silent_failing_concat,
        }
    })
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

pub fn settings(detector: &Path, concat: &Path, scratch_root: &Path) -> Settings {
    Settings {
        detector_program: detector.to_path_buf(),
        concat_program: concat.to_path_buf(),
        scratch_root: Some(scratch_root.to_path_buf()),
        poll_interval_ms: 10,
        ..Settings::default()
    }
}

pub fn config(detector: &Path, concat: &Path, scratch_root: &Path) -> Config {
    Config::from_settings(settings(detector, concat, scratch_root))
}

/// A "video" the fake detector splits into `scenes` clips.
pub fn fake_video(dir: &Path, name: &str, scenes: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, scenes.to_string()).unwrap();
    path
}

/// Clip paths the fake concatenator recorded, in output order.
pub fn concatenated(output: &Path) -> Vec<PathBuf> {
    fs::read_to_string(output)
        .unwrap()
        .lines()
        .map(PathBuf::from)
        .collect()
}

pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}
