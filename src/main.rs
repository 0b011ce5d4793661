use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use ledger_synth::{generate, SynthConfig};

/// Synthesize a year of fictitious household-ledger transactions, one JSON
/// file per month.
#[derive(Parser)]
#[command(name = "ledger-synth")]
#[command(author, version, about)]
struct Cli {
    /// Target year for every generated date and file name
    #[arg(long, default_value_t = 2026)]
    year: i32,

    /// Output directory (default: financial_data_{year})
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// RNG seed for reproducible output; omit for fresh data each run
    #[arg(long)]
    seed: Option<u64>,

    /// First record id (default: {year}000001)
    #[arg(long)]
    start_id: Option<i64>,

    /// Comma-separated expense category labels
    #[arg(long, value_delimiter = ',')]
    categories: Option<Vec<String>>,

    /// Minimum expense records per month
    #[arg(long)]
    min_expenses: Option<u32>,

    /// Maximum expense records per month
    #[arg(long)]
    max_expenses: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SynthConfig::for_year(cli.year);
    if let Some(out_dir) = cli.out_dir {
        config.output_dir = out_dir;
    }
    if let Some(start_id) = cli.start_id {
        config.start_id = start_id;
    }
    if let Some(categories) = cli.categories {
        config.categories = categories;
    }
    if let Some(min) = cli.min_expenses {
        config.expense_count.0 = min;
    }
    if let Some(max) = cli.max_expenses {
        config.expense_count.1 = max;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("📒 Ledger Synthesizer - year {}", config.year);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let written = generate(&config, &mut rng)?;

    let total: usize = written.iter().map(|file| file.records).sum();
    println!(
        "✓ {} records across {} files in {}",
        total,
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}
