use lib::slot_cover::{
    cover_reporter::{JsonReporter, TextReporter},
    cover_search::CoverSearch,
    helpers::get_config,
    models::Args,
    run_tool::run,
};

use std::process::ExitCode;

use clap::Parser;
use log::info;

fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_env("SCHED_LOG")
        .init();

    /* Get arguments and config */
    let args = Args::parse();
    let config = match get_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let amount = args.amount.unwrap_or(config.amount);
    info!("Picking {} slot(s) from {}", amount, args.data.display());

    /* Search and print */
    let search = CoverSearch::new(amount).with_max_attempts(config.max_attempts);
    let stdout = std::io::stdout().lock();
    let result = if args.json {
        run(args.data.as_path(), JsonReporter(stdout), &search)
    } else {
        run(args.data.as_path(), TextReporter(stdout), &search)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
