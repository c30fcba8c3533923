//! Aggregated delivery counts grouped by carrier and chain.

use crate::grid::Sheet;
use crate::schema::SheetSchema;
use serde::Serialize;
use std::collections::HashMap;

/// How many entries each grouping keeps.
const TOP_N: usize = 10;

/// Which rows feed the aggregation.
///
/// Two deployment policies exist in the field; the caller picks one
/// explicitly rather than the aggregator guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    /// Every data row; the total counts scheduled deliveries across the
    /// whole period (every delivery-column cell with a positive code).
    WholePeriod,
    /// Only the rows moved by a rescheduling pass; the total is the move
    /// count.
    Rescheduled(Vec<u32>),
}

/// Grouped delivery counts for one run.
///
/// Group entries are ordered by descending count, ties broken by
/// first-encountered row order, truncated to the top 10. The group maxima
/// are kept separately for relative-scale rendering and default to 1 when a
/// group is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_deliveries: u32,
    pub by_carrier: Vec<(String, u32)>,
    pub max_carrier_count: u32,
    pub by_chain: Vec<(String, u32)>,
    pub max_chain_count: u32,
}

/// Aggregate carrier and chain counts over the rows selected by `scope`.
pub fn aggregate(sheet: &Sheet, schema: &SheetSchema, scope: &ReportScope) -> Report {
    let mut carriers = GroupCounter::default();
    let mut chains = GroupCounter::default();

    let total_deliveries = match scope {
        ReportScope::WholePeriod => {
            let mut total = 0u32;
            for row in schema.first_data_row..=sheet.last_used_row() {
                count_row(sheet, schema, row, &mut carriers, &mut chains);
                for &column in &schema.delivery_columns {
                    if sheet
                        .cell(column, row)
                        .as_number()
                        .is_some_and(|code| code > 0.0)
                    {
                        total += 1;
                    }
                }
            }
            total
        }
        ReportScope::Rescheduled(rows) => {
            for &row in rows {
                count_row(sheet, schema, row, &mut carriers, &mut chains);
            }
            rows.len() as u32
        }
    };

    let (by_carrier, max_carrier_count) = carriers.top(TOP_N);
    let (by_chain, max_chain_count) = chains.top(TOP_N);

    Report {
        total_deliveries,
        by_carrier,
        max_carrier_count,
        by_chain,
        max_chain_count,
    }
}

fn count_row(
    sheet: &Sheet,
    schema: &SheetSchema,
    row: u32,
    carriers: &mut GroupCounter,
    chains: &mut GroupCounter,
) {
    if let Some(key) = sheet.cell(schema.carrier_column, row).group_key() {
        carriers.add(key);
    }
    if let Some(key) = sheet.cell(schema.chain_column, row).group_key() {
        chains.add(key);
    }
}

/// Frequency counter that remembers first-encountered order so ranking is
/// stable under ties.
#[derive(Default)]
struct GroupCounter {
    counts: HashMap<String, (u32, usize)>,
}

impl GroupCounter {
    fn add(&mut self, key: String) {
        let first_seen = self.counts.len();
        let entry = self.counts.entry(key).or_insert((0, first_seen));
        entry.0 += 1;
    }

    /// Descending by count, ties by first-encountered order, truncated to
    /// `n`. The second value is the largest count (1 when empty).
    fn top(self, n: usize) -> (Vec<(String, u32)>, u32) {
        let mut entries: Vec<(String, u32, usize)> = self
            .counts
            .into_iter()
            .map(|(key, (count, first_seen))| (key, count, first_seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries.truncate(n);

        let max = entries.first().map(|entry| entry.1).unwrap_or(1);
        (
            entries.into_iter().map(|(key, count, _)| (key, count)).collect(),
            max,
        )
    }
}
