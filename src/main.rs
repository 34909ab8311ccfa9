use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use trace_to_sgf::logging::setup_logging;
use trace_to_sgf::pipeline::annotate_game_record;

/// Turn a playout trace CSV into an SGF file with a variation for each
/// playout, overlaid on the game record the trace was made from.
#[derive(Parser, Debug)]
#[command(name = "trace_to_sgf", version)]
struct Config {
    /// Original SGF file the trace was made from
    input_sgf: PathBuf,

    /// CSV file with the trace of the playouts
    trace_csv: PathBuf,

    /// New SGF file to be created (must not exist yet)
    output_sgf: PathBuf,

    /// Number of playouts to add; omitted or <= 0 means all playouts in
    /// the trace
    max_playouts: Option<i64>,
}

fn main() -> ExitCode {
    setup_logging();
    let config = Config::parse();

    match annotate_game_record(
        &config.input_sgf,
        &config.trace_csv,
        &config.output_sgf,
        config.max_playouts.unwrap_or(0),
    ) {
        Ok(playouts) => {
            println!(
                "Added {} playouts to {}",
                playouts,
                config.output_sgf.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
