use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use vidbox::catalog::load_catalog;
use vidbox::{Player, Shell};

#[derive(Parser, Debug)]
#[command(name = "vidbox")]
#[command(about = "Interactive video player shell over a JSON catalog", long_about = None)]
struct Args {
    /// Path to the video catalog (JSON)
    #[arg(short = 'c', long, default_value = "demos/catalog.json")]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog_path = shellexpand::tilde(&args.catalog);
    let library = load_catalog(PathBuf::from(catalog_path.as_ref()).as_path())?;

    let mut shell = Shell::new(Player::new(library));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
