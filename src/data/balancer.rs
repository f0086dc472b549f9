// ============================================================
// Layer 4 — Class Balancer
// ============================================================
// Resamples rows so every intent class has (up to) the same
// number of rows. Runs on the raw table, before column
// standardization and normalization.
//
//   with_replacement = true   → exactly `target` draws per class,
//                               duplicates allowed
//   with_replacement = false  → min(target, class size) rows,
//                               no row is ever duplicated
//
// Default target: when `size_per_class` is None, the target is
// the size of the LARGEST class. With replacement that upsamples
// every smaller class to parity; without replacement it keeps
// every row of every class.
//
// Output order: classes in first-seen order; inside a class,
// rows drawn without replacement keep their original relative
// order, rows drawn with replacement appear in draw order. The
// RNG is a StdRng seeded from `seed`, so a fixed seed always
// gives the same output.
//
// Reference: rand crate documentation (seq::index::sample)

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{error::ProcessorError, row::RawTable};

/// Rebalancing parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BalanceOptions {
    /// Rows per class; None means "size of the largest class"
    pub size_per_class:   Option<usize>,
    pub with_replacement: bool,
    pub seed:             u64,
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self {
            size_per_class:   None,
            with_replacement: false,
            seed:             42,
        }
    }
}

/// Resample `items` per class, where `label_of` gives an item's class.
pub fn rebalance<T, F>(items: Vec<T>, label_of: F, options: &BalanceOptions) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    // ── Partition by label, remembering first-seen class order ───────────────
    let mut classes:  Vec<(String, Vec<T>)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = label_of(&item).to_string();
        let slot  = match position.get(&label) {
            Some(&slot) => slot,
            None => {
                position.insert(label.clone(), classes.len());
                classes.push((label, Vec::new()));
                classes.len() - 1
            }
        };
        classes[slot].1.push(item);
    }

    let target = options.size_per_class.unwrap_or_else(|| {
        classes.iter().map(|(_, members)| members.len()).max().unwrap_or(0)
    });

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut out = Vec::new();

    for (label, members) in classes {
        let before = out.len();

        if options.with_replacement {
            // Partitioning never creates an empty class
            for _ in 0..target {
                let pick = rng.gen_range(0..members.len());
                out.push(members[pick].clone());
            }
        } else {
            let amount     = target.min(members.len());
            let mut picked = index::sample(&mut rng, members.len(), amount).into_vec();
            picked.sort_unstable();
            out.extend(picked.into_iter().map(|i| members[i].clone()));
        }

        tracing::debug!(
            "Class '{}': {} rows → {} rows",
            label,
            members.len(),
            out.len() - before
        );
    }

    tracing::info!(
        "Rebalanced to {} rows (target {} per class, replacement: {})",
        out.len(),
        target,
        options.with_replacement
    );

    out
}

/// Rebalance the records of a raw table by one of its columns.
pub fn rebalance_table(
    table:        RawTable,
    label_column: &str,
    options:      &BalanceOptions,
) -> Result<RawTable, ProcessorError> {
    let column             = table.column_index(label_column)?;
    let (headers, records) = table.into_parts();

    let records = rebalance(
        records,
        |record: &Vec<String>| RawTable::cell(record, column),
        options,
    );

    Ok(RawTable::new(headers, records))
}
