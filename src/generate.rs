// Synthesis pipeline
// One linear pass over the 12 months of the target year. The id counter is
// threaded through the loop explicitly; the random source is injected so
// callers control seeding.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use std::fs;
use std::path::PathBuf;

use crate::config::{AmountRange, SynthConfig};
use crate::record::Transaction;
use crate::store::{month_file_name, write_month};

/// Summary of one emitted monthly file.
#[derive(Debug)]
pub struct MonthlyFile {
    pub path: PathBuf,
    pub records: usize,
}

/// Synthesize the full year and write one file per month.
///
/// Validates the configuration before touching the filesystem, then
/// processes months strictly in order. Any I/O failure aborts the
/// remaining months; files already written stay in place.
pub fn generate<R: Rng>(config: &SynthConfig, rng: &mut R) -> Result<Vec<MonthlyFile>> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut next_id = config.start_id;
    let mut written = Vec::with_capacity(12);

    for month in 1..=12 {
        let records = generate_month(config, month, &mut next_id, rng)?;
        let path = config.output_dir.join(month_file_name(config.year, month));
        write_month(&path, &records)?;
        println!("✓ wrote {} ({} records)", path.display(), records.len());
        written.push(MonthlyFile {
            path,
            records: records.len(),
        });
    }

    println!("✓ ledger for {} complete", config.year);
    Ok(written)
}

/// Build one month's records: salary, a random number of expenses, then
/// the saving entry, sorted by date.
///
/// The draw order is fixed (count, then day/category/amount per expense)
/// so a seeded RNG reproduces identical output.
fn generate_month<R: Rng>(
    config: &SynthConfig,
    month: u32,
    next_id: &mut i64,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    let last_day = last_day_of_month(config.year, month)?;
    let mut records = Vec::new();

    let date = month_date(config.year, month, config.income.day)?;
    records.push(Transaction::income(
        take_id(next_id),
        date,
        config.income.amount,
    ));

    let (count_min, count_max) = config.expense_count;
    let count = rng.gen_range(count_min..=count_max);
    for _ in 0..count {
        let day = rng.gen_range(1..=last_day);
        let category = &config.categories[rng.gen_range(0..config.categories.len())];
        let amount = quantized_amount(&config.expense_amount, rng);
        let date = month_date(config.year, month, day)?;
        records.push(Transaction::expense(take_id(next_id), date, category, amount));
    }

    if config.saving.day <= last_day {
        let date = month_date(config.year, month, config.saving.day)?;
        records.push(Transaction::saving(
            take_id(next_id),
            date,
            config.saving.amount,
        ));
    }

    // stable sort: same-day records keep generation order
    records.sort_by_key(|tx| tx.date);
    Ok(records)
}

/// Number of days in the given month, leap-aware for February.
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32> {
    let first = month_date(year, month, 1)?;
    let next = if month == 12 {
        month_date(year + 1, 1, 1)?
    } else {
        month_date(year, month + 1, 1)?
    };
    Ok((next - first).num_days() as u32)
}

fn month_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {}-{:02}-{:02}", year, month, day))
}

fn take_id(next_id: &mut i64) -> i64 {
    let id = *next_id;
    *next_id += 1;
    id
}

/// Uniform over the integer multiples of `step` inside `[min, max]`.
fn quantized_amount<R: Rng>(range: &AmountRange, rng: &mut R) -> i64 {
    rng.gen_range(range.min / range.step..=range.max / range.step) * range.step
}
