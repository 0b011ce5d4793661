// Ledger Synthesizer - Core Library
// Exposes the record model, configuration, and generation pipeline for the
// CLI and tests

pub mod config;
pub mod generate;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use config::{AmountRange, FixedEntry, SynthConfig};
pub use generate::{generate, last_day_of_month, MonthlyFile};
pub use record::{Transaction, TransactionType};
pub use store::{load_month, month_file_name, write_month};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
