mod render;

pub(crate) use render::render;

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::categorize::{self, Categorizer};
use crate::models::{Category, Transaction};

/// Aggregated figures for one category across the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategorySummary {
    pub(crate) category: Category,
    pub(crate) count: usize,
    pub(crate) total: Decimal,
    pub(crate) monthly: Decimal,
}

#[derive(Debug)]
pub(crate) struct Report {
    /// Ordered by priority ascending, then total descending.
    pub(crate) summaries: Vec<CategorySummary>,
    pub(crate) months: Decimal,
}

pub(crate) fn summarize(categorizer: &Categorizer, transactions: &[Transaction]) -> Report {
    let months = approx_months(transactions);

    let mut groups: BTreeMap<Category, (usize, Decimal)> = BTreeMap::new();
    for txn in transactions {
        let category = categorizer.categorize(txn.description.trim());
        let entry = groups.entry(category).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        // Exports carry signed amounts; the report shows magnitudes
        entry.1 += txn.abs_amount();
    }

    let mut summaries: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, (count, total))| CategorySummary {
            category,
            count,
            total,
            monthly: (total / months).round_dp(2),
        })
        .collect();

    summaries.sort_by(|a, b| {
        categorize::priority(a.category)
            .cmp(&categorize::priority(b.category))
            .then(b.total.cmp(&a.total))
    });

    Report { summaries, months }
}

/// Elapsed days across the dataset divided by 30. A single date (or an
/// empty dataset) has zero span and counts as one month, so the monthly
/// figure equals the total instead of dividing by zero.
fn approx_months(transactions: &[Transaction]) -> Decimal {
    let dates = || transactions.iter().map(|t| t.date);
    let (Some(first), Some(last)) = (dates().min(), dates().max()) else {
        return Decimal::ONE;
    };

    let days = (last - first).num_days();
    if days == 0 {
        Decimal::ONE
    } else {
        Decimal::from(days) / Decimal::from(30)
    }
}
