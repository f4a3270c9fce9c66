//! Terminal frontend for a 3x3x3 twisty puzzle.

mod cli;
mod driver;
mod net;
mod verify;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
