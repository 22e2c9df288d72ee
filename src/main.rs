use anyhow::Result;
use clap::Parser;
use console::style;
use log::info;
use scene_shuffle::cli::{Cli, run_command, usage_exit_code};
use scene_shuffle::config::Config;
use scene_shuffle::init;
use scene_shuffle::signal::setup_shutdown_signal;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(usage_exit_code(&e));
        }
    };

    init::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", style("error:").red().bold());
        process::exit(1);
    }

    info!("finished");
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let shutdown_signal = setup_shutdown_signal()?;

    run_command(&cli.command, &config, &shutdown_signal)?;
    Ok(())
}
