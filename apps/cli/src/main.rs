use std::process::ExitCode;

use clap::Parser;
use nemo_cli::args::Args;
use nemo_cli::error::SourceError;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    nemo_cli::init_tracing(args.log_level());

    match nemo_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            match err.downcast_ref::<SourceError>() {
                Some(source_err) => ExitCode::from(source_err.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}
