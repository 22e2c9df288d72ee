use super::args::{Commands, FullArgs, ShuffleArgs, SplitArgs};
use crate::component::pipeline::default_output_path;
use crate::component::{ClipShuffler, Pipeline, SceneExtractor};
use crate::config::Config;
use crate::error::ShuffleResult;
use crate::tools::{Capability, require, validate_source_file};
use console::style;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_command(
    command: &Commands,
    config: &Config,
    shutdown_signal: &Arc<AtomicBool>,
) -> ShuffleResult<()> {
    match command {
        Commands::Split(args) => run_split(args, config, shutdown_signal),
        Commands::Shuffle(args) => run_shuffle(args, config, shutdown_signal),
        Commands::Full(args) => run_full(args, config, shutdown_signal),
    }
}

pub fn run_split(
    args: &SplitArgs,
    config: &Config,
    shutdown_signal: &Arc<AtomicBool>,
) -> ShuffleResult<()> {
    validate_source_file(&args.source)?;
    require(config, &[Capability::SceneDetector])?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.settings.scenes_dir_name));

    println!("{}", style("=== Scene split ===").cyan().bold());
    let extractor = SceneExtractor::new(config, Arc::clone(shutdown_signal));
    let clips = extractor.extract(&args.source, &output)?;

    println!(
        "{} {} scene clips written to {}",
        style("✓").green().bold(),
        style(clips.len()).green(),
        output.display()
    );
    Ok(())
}

pub fn run_shuffle(
    args: &ShuffleArgs,
    config: &Config,
    shutdown_signal: &Arc<AtomicBool>,
) -> ShuffleResult<()> {
    require(config, &[Capability::Concatenator])?;

    println!("{}", style("=== Clip shuffle ===").cyan().bold());
    let shuffler = ClipShuffler::new(config, Arc::clone(shutdown_signal));
    let report = shuffler.shuffle(&args.source, &args.output)?;

    println!(
        "{} {} clips shuffled into {}",
        style("✓").green().bold(),
        style(report.clip_count()).green(),
        report.output.display()
    );
    Ok(())
}

pub fn run_full(
    args: &FullArgs,
    config: &Config,
    shutdown_signal: &Arc<AtomicBool>,
) -> ShuffleResult<()> {
    validate_source_file(&args.source)?;
    require(config, &[Capability::SceneDetector, Capability::Concatenator])?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.source, config));

    println!("{}", style("=== Split and shuffle ===").cyan().bold());
    let mut pipeline = Pipeline::new(config, Arc::clone(shutdown_signal));
    let report = pipeline.run_full(&args.source, &output, args.keep_scenes)?;

    println!(
        "{} {} scenes shuffled into {}",
        style("✓").green().bold(),
        style(report.clip_count).green(),
        report.output.display()
    );
    if let Some(scenes) = &report.retained_scenes {
        println!("  scene clips kept in {}", style(scenes.display()).dim());
    }
    Ok(())
}
