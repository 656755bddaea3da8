use clap::Parser;
use std::path::PathBuf;

/// Display a text one word at a time.
///
/// The initial rate comes from RQ_RATE (words per minute, default 120;
/// suffixes such as `wpm` or `hz` are accepted). While reading: `+`/`-`
/// change the rate, `p` pauses, arrow keys step back and forth, `q` quits.
#[derive(Debug, Parser)]
#[command(name = "rq", version)]
pub struct Cli {
    /// File to read; `-` or nothing reads standard input.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
