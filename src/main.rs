use clap::Parser;
use fastq_extract::{cli, commands, config::Config, utils::logging};

fn main() {
    let args = cli::Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(config.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = commands::extract::run(&args.id_file, &args.fastq_file, &config);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
