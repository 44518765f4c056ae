#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use search_trees::config::CompareConfig;
use search_trees::generator::KeyGenerator;
use search_trees::report::{compact_traversal, Comparison, TableHeader, TheoreticalEstimates};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_trees=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match CompareConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        sizes = ?config.sizes,
        min_degree = config.min_degree,
        seed = ?config.seed,
        "Loaded configuration"
    );

    let mut generator = match config.seed {
        Some(seed) => KeyGenerator::with_seed(seed),
        None => KeyGenerator::from_entropy(),
    };

    for comparison in Comparison::ALL {
        let (first, second) = comparison.labels();
        println!("{first} vs {second}");
        println!();

        let mut rows = Vec::with_capacity(config.sizes.len());
        for &size in &config.sizes {
            // Ten times as many candidate values as keys keeps the draw sparse.
            let max = i32::try_from(size.saturating_mul(10)).unwrap_or(i32::MAX);
            let keys = generator.unique_keys(size, 1, max);

            let measurement = match comparison.measure(&keys, config.min_degree) {
                Ok(measurement) => measurement,
                Err(e) => {
                    tracing::error!("Failed to compare trees: {e}");
                    std::process::exit(1);
                }
            };

            println!("n = {size}");
            println!("  {first:<9} {}", compact_traversal(&measurement.first_in_order));
            println!("  {second:<9} {}", compact_traversal(&measurement.second_in_order));
            rows.push(measurement.row);
        }

        println!();
        println!("{}", TableHeader::from(comparison));
        for row in rows {
            println!("{row}");
        }
        println!();
        tracing::info!(?comparison, "comparison finished");
    }

    println!("Theoretical estimates");
    println!();
    println!("{}", TheoreticalEstimates::HEADER);
    for &size in &config.sizes {
        println!("{}", TheoreticalEstimates::for_size(size));
    }
}
