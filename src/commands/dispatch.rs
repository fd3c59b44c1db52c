//! Command dispatch logic for rutter

use crate::cli::{Cli, Commands};
use crate::commands::{count, load, route, shortest};
use rutter_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    let graph = load::load_graph(cli)?;

    match &cli.command {
        Commands::Route { stops } => route::execute(cli, &graph, stops),
        Commands::Count(args) => count::execute(cli, &graph, args),
        Commands::Shortest { from, to } => shortest::execute(cli, &graph, *from, *to),
    }
}
