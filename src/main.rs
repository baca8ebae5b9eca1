use std::path::PathBuf;

use clap::Parser;
use console::style;
use currenscript::run_files;

/// currenscript is a statically typed scripting language with built-in
/// currency amounts and conversions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The configuration file declaring currency ids and exchange rates.
    config: PathBuf,

    /// The program to run.
    source: PathBuf,
}

fn main() {
    let args = Args::parse();

    match run_files(&args.config, &args.source) {
        Ok(result) => {
            let rendered = result.map(|value| value.to_string()).unwrap_or_default();
            println!("Program execution result: {rendered}");
        },
        Err(e) => {
            eprintln!("{}: {e}", style(e.category()).red().bold());
            std::process::exit(1);
        },
    }
}
