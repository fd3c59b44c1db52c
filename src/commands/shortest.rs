//! `rutter shortest` command - shortest weighted route between two nodes

use crate::cli::Cli;
use rutter_core::error::Result;
use rutter_core::format::OutputFormat;
use rutter_core::graph::{self, Graph};

/// Execute the shortest command
pub fn execute(cli: &Cli, graph: &Graph<char>, from: char, to: char) -> Result<()> {
    let weight = graph::shortest_route(graph, &from, &to)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": weight.is_some(),
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
