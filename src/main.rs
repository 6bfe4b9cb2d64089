//! Cube console binary
//!
//! Loads a Card Conjurer cube file and runs the interactive query/draft
//! loop on stdin.

use anyhow::Context;
use clap::Parser;
use cube_cli::loader::CubeLoader;
use cube_cli::repl::{ReplSession, DEFAULT_PACK_SIZE};
use cube_cli::repository::CardRepository;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cube")]
#[command(about = "Interactive query and draft console for Card Conjurer cube files", long_about = None)]
struct Cli {
    /// Cube save file to load
    #[arg(value_name = "CUBE_FILE", default_value = "cube.cardconjurer")]
    cube: PathBuf,

    /// Random seed for deterministic draft shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Cards offered per draft pick
    #[arg(long, default_value_t = DEFAULT_PACK_SIZE as u8, value_parser = clap::value_parser!(u8).range(1..=15))]
    pack_size: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cards = CubeLoader::load_from_file(&cli.cube)
        .with_context(|| format!("failed to load cube file {}", cli.cube.display()))?;
    if cards.is_empty() {
        anyhow::bail!("no usable cards in {}", cli.cube.display());
    }
    println!("{} cards loaded", cards.len());

    let repo = CardRepository::new(cards);
    let mut session = ReplSession::new(repo, cli.seed, cli.pack_size as usize);

    let stdin = io::stdin();
    let mut out = io::stdout();
    session.run(&mut stdin.lock(), &mut out)?;
    Ok(())
}
