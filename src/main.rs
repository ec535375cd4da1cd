use clap::Parser;
use indelscan::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{catalog, lengths, pairwise, population},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Pairwise(_) => "pairwise",
        Command::Population(_) => "population",
        Command::Catalog(_) => "catalog",
        Command::Lengths(_) => "lengths",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Pairwise(args) => pairwise::pairwise(args)?,
        Command::Population(args) => population::population(args)?,
        Command::Catalog(args) => catalog::catalog(args)?,
        Command::Lengths(args) => lengths::lengths(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
