// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numerical_monoid::{Metric, NumericalMonoid};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monoid")]
#[command(about = "Factorizations, Betti elements and catenary degrees of numerical monoids", long_about = None)]
#[command(version)]
struct Cli {
    /// Generators (comma-separated, coprime)
    #[arg(
        short,
        long,
        global = true,
        value_delimiter = ',',
        env = "MONOID_GENERATORS",
        default_value = "11,34,35"
    )]
    generators: Vec<i64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Every factorization of an element
    Factorizations {
        /// Element
        n: i64,
    },

    /// Largest integer outside the monoid
    Frobenius,

    /// Smallest element in each residue class
    Apery {
        /// Modulus (default: the smallest generator)
        modulus: Option<i64>,
    },

    /// Betti elements, ascending
    Betti,

    /// Catenary degree of an element
    Catenary {
        /// Element
        n: i64,

        /// Distance between factorizations
        #[arg(short, long, default_value = "classic-catenary")]
        metric: Metric,
    },

    /// Maximal non-reducible edges of an element
    Edges {
        /// Element
        n: i64,

        /// Distance between factorizations
        #[arg(short, long, default_value = "classic-catenary")]
        metric: Metric,
    },

    /// Minimal spanning tree of the factorization graph
    Tree {
        /// Element
        n: i64,

        /// Distance between factorizations
        #[arg(short, long, default_value = "classic-catenary")]
        metric: Metric,
    },

    /// Compare catenary degrees at the bound and one period later
    Hypothesis {
        /// Distance between factorizations
        #[arg(short, long, default_value = "classic-catenary")]
        metric: Metric,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut monoid = NumericalMonoid::new(&cli.generators)
        .with_context(|| format!("Invalid generators {:?}", cli.generators))?;

    let output = execute_command(&cli.command, &mut monoid)?;
    print_output(cli.json, &output)
}

fn execute_command(command: &Commands, monoid: &mut NumericalMonoid) -> Result<Value> {
    match *command {
        Commands::Factorizations { n } => Ok(serde_json::to_value(&monoid.factorizations(n)[..])?),
        Commands::Frobenius => Ok(json!(monoid.frobenius())),
        Commands::Apery { modulus } => {
            let modulus = modulus.unwrap_or_else(|| monoid.multiplicity());
            let apery = monoid
                .apery_set(modulus)
                .with_context(|| format!("Failed to compute the Apéry set modulo {}", modulus))?;
            Ok(json!(apery))
        }
        Commands::Betti => Ok(json!(monoid.betti_elements())),
        Commands::Catenary { n, metric } => {
            let degree = match metric {
                Metric::ClassicCatenary => json!(monoid.catenary_degree(n)?),
                _ => json!(monoid.catenary_degree_by_metric(n, metric)?),
            };
            Ok(json!({ "element": n, "metric": metric, "catenary_degree": degree }))
        }
        Commands::Edges { n, metric } => {
            let edges = match metric {
                Metric::ClassicCatenary => monoid.max_non_reducible_edges(n)?,
                _ => monoid.max_non_reducible_edges_by_metric(n, metric)?,
            };
            Ok(serde_json::to_value(edges)?)
        }
        Commands::Tree { n, metric } => {
            let tree = monoid.minimal_spanning_tree_by_metric(n, metric).to_vec();
            let factorizations = monoid.factorizations(n);
            Ok(json!({ "factorizations": &factorizations[..], "edges": tree }))
        }
        Commands::Hypothesis { metric } => match monoid.catenary_bound_hypothesis(metric)? {
            Some(hypothesis) => Ok(json!({
                "summary": hypothesis.to_string(),
                "holds": hypothesis.holds(),
                "details": hypothesis,
            })),
            None => Ok(json!({ "summary": "no Betti elements", "holds": true })),
        },
    }
}

fn print_output(as_json: bool, value: &Value) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print_plain(value)?;
    }
    Ok(())
}

/// One line per array item or object field; nested values as compact JSON.
fn print_plain(value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        }
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::String(s) => println!("{}: {}", key, s),
                    _ => println!("{}: {}", key, serde_json::to_string(val)?),
                }
            }
        }
        _ => println!("{}", value),
    }
    Ok(())
}
