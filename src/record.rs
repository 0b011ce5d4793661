// Transaction record model
// One record per ledger entry; the JSON field order is the file format.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Category label carried by every income record.
pub const INCOME_CATEGORY: &str = "월급";
/// Category label carried by every saving record.
pub const SAVING_CATEGORY: &str = "기타";
/// Memo label for saving records (the youth savings plan).
pub const SAVING_MEMO_LABEL: &str = "청년 적금";
/// Memo label appended after the category on expense records.
pub const EXPENSE_MEMO_LABEL: &str = "지출";

/// Kind of ledger entry. Serialized as the lowercase strings the ledger
/// files have always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Saving,
}

/// One ledger entry.
///
/// Field order is the on-disk key order: id, date, type, category, memo,
/// amount. Amounts are whole currency units (no minor units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub memo: String,
    pub amount: i64,
}

impl Transaction {
    /// Monthly salary entry. Memo is "{year}-{MM} 월급".
    pub fn income(id: i64, date: NaiveDate, amount: i64) -> Self {
        Transaction {
            id,
            date,
            kind: TransactionType::Income,
            category: INCOME_CATEGORY.to_string(),
            memo: format!("{} {}", month_tag(date), INCOME_CATEGORY),
            amount,
        }
    }

    /// Expense entry. Memo is "{year}-{MM} {category} 지출".
    pub fn expense(id: i64, date: NaiveDate, category: &str, amount: i64) -> Self {
        Transaction {
            id,
            date,
            kind: TransactionType::Expense,
            category: category.to_string(),
            memo: format!("{} {} {}", month_tag(date), category, EXPENSE_MEMO_LABEL),
            amount,
        }
    }

    /// Monthly saving entry. Memo is "{year}-{MM} 청년 적금".
    pub fn saving(id: i64, date: NaiveDate, amount: i64) -> Self {
        Transaction {
            id,
            date,
            kind: TransactionType::Saving,
            category: SAVING_CATEGORY.to_string(),
            memo: format!("{} {}", month_tag(date), SAVING_MEMO_LABEL),
            amount,
        }
    }
}

/// "{year}-{MM}" prefix shared by every memo in a month.
fn month_tag(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}
