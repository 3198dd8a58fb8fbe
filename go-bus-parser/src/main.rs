use std::process::ExitCode;

use go_bus_parser::GoBusAgency;
use go_bus_parser::config::AgencyConfig;
use go_bus_parser::routes::{RouteRecord, provide_missing_route_color};
use go_bus_parser::stops::NoFallback;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: go-bus-parser <command> <value>...

commands:
  headsign <text>...      normalize trip headsigns
  stop-name <text>...     normalize stop names
  direction <a> <b>       pick which of two direction headsigns to drop
  stop-id <code>...       resolve stop codes to stop ids
  route-color <name>...   fallback color for uncolored route short names

environment:
  GO_BUS_LANGUAGE         label language, \"en\" (default) or \"fr\"
  RUST_LOG                log filter (default \"warn\")";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match AgencyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let agency = GoBusAgency::new(config, NoFallback);

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let values: Vec<String> = args.collect();

    match command.as_str() {
        "headsign" => {
            for raw in &values {
                let out = agency.normalize_trip_headsign(raw);
                println!("{}", json!({ "input": raw, "headsign": out }));
            }
        }
        "stop-name" => {
            for raw in &values {
                let out = agency.normalize_stop_name(raw);
                println!("{}", json!({ "input": raw, "stop_name": out }));
            }
        }
        "direction" => {
            let [first, second] = values.as_slice() else {
                eprintln!("direction takes exactly two headsigns\n\n{USAGE}");
                return ExitCode::from(2);
            };
            let choice = agency.select_droppable_headsign(first, second);
            println!("{}", json!({ "first": first, "second": second, "choice": choice }));
        }
        "stop-id" => {
            for code in &values {
                let stop_id = agency.stop_id_from_code(code);
                println!("{}", json!({ "code": code, "stop_id": stop_id }));
            }
        }
        "route-color" => {
            for short_name in &values {
                let route = RouteRecord {
                    route_id: short_name.clone(),
                    route_short_name: short_name.clone(),
                    route_color: None,
                };
                match provide_missing_route_color(&route) {
                    Ok(color) => {
                        println!("{}", json!({ "route": short_name, "color": color.as_str() }))
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
        }
        "-h" | "--help" | "help" => println!("{USAGE}"),
        other => {
            eprintln!("unknown command {other:?}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}
