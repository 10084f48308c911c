//! Command Line Interface for the savings horizon projector.
use anyhow::Result;
use clap::{Parser, Subcommand};
use horizon_data::{CsvSeriesLoader, SeriesSource};
use horizon_domain::metrics::{annual_returns, estimate_return_statistics};
use horizon_simulation::prelude::*;
use prettytable::{Table, row};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "horizon")]
#[command(about = "Monte Carlo projection of long-horizon savings plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate annual return statistics from a historical series
    Estimate {
        /// Path to the historical CSV file
        #[arg(short, long)]
        file: String,

        /// Name of the date column
        #[arg(long, default_value = "Date")]
        date_column: String,

        /// Name of the price column (first non-date column if omitted)
        #[arg(long)]
        price_column: Option<String>,
    },
    /// Project investment outcomes under recurring monthly deposits
    Project {
        /// Path to the historical CSV file
        #[arg(short, long)]
        file: String,

        /// Name of the date column
        #[arg(long, default_value = "Date")]
        date_column: String,

        /// Name of the price column (first non-date column if omitted)
        #[arg(long)]
        price_column: Option<String>,

        /// Initial investment amount
        #[arg(long, default_value = "10000")]
        initial: Decimal,

        /// Recurring monthly deposit
        #[arg(long, default_value = "100")]
        deposit: Decimal,

        /// Projection horizon in years
        #[arg(long, default_value_t = 30)]
        years: usize,

        /// Number of simulated paths
        #[arg(long, default_value_t = 1000)]
        simulations: usize,

        /// Comma-separated percentile levels in [0, 100]
        #[arg(long, default_value = "10,20,50,90")]
        percentiles: String,

        /// Random seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            file,
            date_column,
            price_column,
        } => {
            let series = build_loader(&file, &date_column, price_column.as_deref()).load()?;
            let annual = annual_returns(&series)?;
            let stats = estimate_return_statistics(&series)?;

            println!(
                "📈 Loaded {} observations across {} calendar years",
                series.len(),
                series.year_span()
            );

            let mut table = Table::new();
            table.add_row(row!["Year", "Annual Return (%)"]);
            for r in &annual {
                table.add_row(row![r.year, format!("{:.2}", r.value * 100.0)]);
            }
            table.printstd();

            println!("Mean annual return: {:.2}%", stats.mean * 100.0);
            println!("Std deviation:      {:.2}%", stats.std_dev * 100.0);
        }
        Commands::Project {
            file,
            date_column,
            price_column,
            initial,
            deposit,
            years,
            simulations,
            percentiles,
            seed,
            json,
        } => {
            let series = build_loader(&file, &date_column, price_column.as_deref()).load()?;
            let stats = estimate_return_statistics(&series)?;
            let levels = parse_percentiles(&percentiles)?;

            let config = ProjectionConfig::new(initial, stats)
                .with_monthly_deposit(deposit)
                .with_horizon_years(years)
                .with_simulations(simulations);
            let projector = MonteCarloProjector::new(config)?;

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };

            println!(
                "🚀 Running {simulations} simulations over {years} years (mean {:.2}%, std {:.2}%)...",
                stats.mean * 100.0,
                stats.std_dev * 100.0
            );
            let paths = projector.run(&mut rng);
            let summary = summarize(&paths, &levels)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("\n📊 Projection Summary");
                println!("════════════════════════════════════");
                let mut table = Table::new();
                table.add_row(row!["Percentile", "Final Value", "TWR (%)"]);
                for band in summary.bands() {
                    table.add_row(row![
                        format!("{:.0}th", band.level),
                        format_thousands(band.final_value),
                        format!("{:.2}", band.twr * 100.0),
                    ]);
                }
                table.printstd();
            }
        }
    }

    Ok(())
}

fn build_loader(file: &str, date_column: &str, price_column: Option<&str>) -> CsvSeriesLoader {
    let mut loader = CsvSeriesLoader::new(file).with_date_column(date_column);
    if let Some(column) = price_column {
        loader = loader.with_price_column(column);
    }
    loader
}

fn parse_percentiles(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid percentile '{part}': {e}"))
        })
        .collect()
}

/// Formats a currency amount with two decimals and thousands separators.
fn format_thousands(value: Decimal) -> String {
    let formatted = format!("{:.2}", value.round_dp(2));
    let (number, decimals) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{decimals}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_percentiles() {
        assert_eq!(
            parse_percentiles("10, 20,50,90").unwrap(),
            vec![10.0, 20.0, 50.0, 90.0]
        );
        assert!(parse_percentiles("10,abc").is_err());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_thousands(dec!(999)), "999.00");
        assert_eq!(format_thousands(dec!(-12345.5)), "-12,345.50");
    }
}
