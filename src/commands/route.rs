//! `rutter route` command - validity and total weight of a stop sequence

use crate::cli::Cli;
use rutter_core::error::Result;
use rutter_core::format::OutputFormat;
use rutter_core::graph::{self, Graph};

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph<char>, stops: &[char]) -> Result<()> {
    let found = graph::has_route(graph, stops);
    let weight = graph::route_weight(graph, stops);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "stops": stops,
                    "found": found,
                    "weight": weight,
                })
            );
        }
        OutputFormat::Human => match weight {
            Some(weight) => println!("{}", weight),
            None => println!("NO SUCH ROUTE"),
        },
    }

    Ok(())
}
