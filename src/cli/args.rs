use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scene-shuffle",
    version,
    about = "Split a video at scene changes and reassemble the scenes in random order",
    arg_required_else_help = true
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON settings file (tool paths, clip extension, scratch location)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a video into one clip per detected scene
    Split(SplitArgs),
    /// Concatenate every clip under a directory in random order
    Shuffle(ShuffleArgs),
    /// Split a video and shuffle its scenes into a new video
    Full(FullArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Video to split
    #[arg(short, long, value_name = "VIDEO")]
    pub source: PathBuf,

    /// Directory for the scene clips [default: ./scenes]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShuffleArgs {
    /// Directory holding the clips (scanned recursively)
    #[arg(short, long, value_name = "DIR")]
    pub source: PathBuf,

    /// Shuffled output video
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct FullArgs {
    /// Video to split and shuffle
    #[arg(short, long, value_name = "VIDEO")]
    pub source: PathBuf,

    /// Shuffled output video [default: <input-stem>_shuffled.mp4]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep the intermediate scene clips next to the output
    #[arg(long)]
    pub keep_scenes: bool,
}

/// Help and version exit 0; every other parse failure exits 1.
#[must_use]
pub fn usage_exit_code(error: &clap::Error) -> i32 {
    i32::from(error.use_stderr())
}
