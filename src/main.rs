//! CLI entry point for the flood-fill tool

use clap::Parser;
use floodtile::io::cli::{Cli, FillSession};

fn main() -> floodtile::Result<()> {
    let cli = Cli::parse();
    let mut session = FillSession::new(cli);
    session.process().map(|_| ())
}
