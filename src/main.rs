//! CLI entry point for the brick wall enumerator

use brickwall::io::cli::{Cli, WallCommand};
use clap::Parser;

fn main() -> brickwall::Result<()> {
    let cli = Cli::parse();
    brickwall::io::logging::init(cli.log_level());
    let command = WallCommand::new(cli);
    command.run()
}
