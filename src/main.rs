mod cli;
mod repl;
mod report;

use anyhow::Context;
use bibman_core::Library;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    let mut library = Library::new();

    if let Some(file) = &cli.file {
        let added = library
            .load_file(file)
            .with_context(|| format!("failed to load '{}'", file.display()))?;
        log::info!("startup catalogue: {} entries", added);
        println!("Loaded {} book entries from {}", added, file.display());
    }

    if !cli.commands.is_empty() {
        if !repl::run_script(&cli.commands, &mut library) {
            std::process::exit(1);
        }
        return Ok(());
    }

    repl::run(&mut library)
}
