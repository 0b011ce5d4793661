// Generator configuration
// Defaults mirror the historical data set; everything is overridable.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Inclusive bounds for randomized expense amounts, quantized to `step`.
#[derive(Debug, Clone)]
pub struct AmountRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

/// A fixed monthly entry: same day and amount every month.
#[derive(Debug, Clone)]
pub struct FixedEntry {
    pub day: u32,
    pub amount: i64,
}

/// Full configuration for one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Target year; every record date, memo, and file name uses this one
    /// value.
    pub year: i32,
    pub output_dir: PathBuf,
    /// Expense category labels, drawn uniformly.
    pub categories: Vec<String>,
    /// First id assigned; the counter advances by one per record and never
    /// resets across months.
    pub start_id: i64,
    pub expense_amount: AmountRange,
    /// Inclusive bounds on the number of expense records per month.
    pub expense_count: (u32, u32),
    pub income: FixedEntry,
    pub saving: FixedEntry,
}

impl SynthConfig {
    /// Defaults for a target year: output under `financial_data_{year}`,
    /// ids starting at `{year}000001`, salary on the 5th, saving on the
    /// 25th.
    pub fn for_year(year: i32) -> Self {
        SynthConfig {
            year,
            output_dir: PathBuf::from(format!("financial_data_{}", year)),
            categories: vec![
                "식비".to_string(),
                "교통".to_string(),
                "쇼핑".to_string(),
                "기타".to_string(),
            ],
            start_id: year as i64 * 1_000_000 + 1,
            expense_amount: AmountRange {
                min: 5_000,
                max: 200_000,
                step: 1_000,
            },
            expense_count: (2, 10),
            income: FixedEntry {
                day: 5,
                amount: 3_000_000,
            },
            saving: FixedEntry {
                day: 25,
                amount: 700_000,
            },
        }
    }

    /// Reject inconsistent configurations before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if !(1000..=9999).contains(&self.year) {
            bail!("year {} is outside 1000..=9999", self.year);
        }
        if self.categories.is_empty() {
            bail!("at least one expense category is required");
        }
        let amount = &self.expense_amount;
        if amount.step <= 0 {
            bail!("expense amount step must be positive, got {}", amount.step);
        }
        if amount.min > amount.max {
            bail!(
                "expense amount min {} exceeds max {}",
                amount.min,
                amount.max
            );
        }
        // min below one step would let the quantized draw produce 0
        if amount.min < amount.step {
            bail!(
                "expense amount min {} is below one step ({})",
                amount.min,
                amount.step
            );
        }
        let (count_min, count_max) = self.expense_count;
        if count_min > count_max {
            bail!("expense count min {} exceeds max {}", count_min, count_max);
        }
        if self.income.amount <= 0 {
            bail!("income amount must be positive, got {}", self.income.amount);
        }
        if self.saving.amount <= 0 {
            bail!("saving amount must be positive, got {}", self.saving.amount);
        }
        // every month must fit the income day; February caps it at 28
        if !(1..=28).contains(&self.income.day) {
            bail!("income day {} is outside 1..=28", self.income.day);
        }
        if !(1..=31).contains(&self.saving.day) {
            bail!("saving day {} is outside 1..=31", self.saving.day);
        }
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig::for_year(2026)
    }
}
