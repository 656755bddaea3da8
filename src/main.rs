use std::process::ExitCode;

use clap::Parser;

use rq::cli::Cli;
use rq::config::WordRate;
use rq::document::Document;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();
    rq::logging::init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", PROGRAM, err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let rate = WordRate::from_env();
    // Loaded in full before the terminal is touched.
    let document = Document::load(cli.file.as_deref())?;
    let reason = rq::ui::run(&document, rate)?;
    tracing::debug!(?reason, "Done");
    Ok(())
}
