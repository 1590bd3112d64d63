mod args;
mod convert;

use clap::Parser;
use log::{debug, LevelFilter};
use std::error::Error;

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    debug!("args: {:?}", args);

    let res =
        convert::config_reader::build_settings(&args).and_then(|s| convert::run_conversion(&s));

    if let Err(e) = res {
        eprintln!("An error occured: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
