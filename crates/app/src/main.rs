//! line-coding: encode a short bit message and plot the resulting signal.
//!
//! Pipeline: arguments -> validated message -> encode per scheme -> plot and
//! metrics on stdout. Validation errors exit with status 2.

mod config;
mod input_gen;
mod plot;

use std::process::ExitCode;

use clap::Parser;
use line_coding_core::{encode, SignalMetrics};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{Cli, Config, MessageSource};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(message) => {
            tracing::warn!(%message, "rejected input");
            eprintln!("Error: {}", message);
            return ExitCode::from(2);
        }
    };

    if config.print_config {
        config.print();
    } else if config.source == MessageSource::Generated {
        println!("Generated message {} (seed {})\n", config.bits, config.seed);
    }

    for &scheme in &config.schemes {
        let signal = encode(&config.bits, scheme);
        tracing::info!(%scheme, bits = %config.bits, "signal encoded");

        if config.plot {
            println!("{}", plot::render(&signal, config.half_width));
        } else {
            println!("{}\n", signal);
        }

        if config.print_metrics {
            SignalMetrics::from_signal(&signal).print_summary();
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging unavailable: {}", e);
    }
}
