//! `rutter count` command - bounded route enumeration

use crate::cli::{Bound, Cli, CountArgs};
use rutter_core::error::Result;
use rutter_core::format::OutputFormat;
use rutter_core::graph::{self, Graph};

/// Execute the count command
pub fn execute(cli: &Cli, graph: &Graph<char>, args: &CountArgs) -> Result<()> {
    let result = match args.bound.bound() {
        Bound::MaxStops(stops) => graph::routes_max_stops(graph, &args.from, &args.to, stops)?,
        Bound::ExactStops(stops) => graph::routes_exact_stops(graph, &args.from, &args.to, stops)?,
        Bound::MaxWeight(weight) => graph::routes_max_weight(graph, &args.from, &args.to, weight)?,
    };

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "from": args.from,
                    "to": args.to,
                    "routes": result.routes,
                    "bound_rejected": result.bound_rejected,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}", result.routes);
        }
    }

    Ok(())
}
