use std::collections::HashMap;

use crate::error::{Result, TransferError};
use crate::models::{ClassificationTable, KontaktregisterField, KontaktregisterValue, Statistic};

/// Per-hour integer series keyed by the statistic codes found in the input.
pub type ClassifiedMeasurements = HashMap<Statistic, Vec<i64>>;

/// Turns a flat list of raw report fields into classified per-hour series.
pub struct FieldClassifier {
    table: ClassificationTable,
}

impl FieldClassifier {
    pub fn new(table: ClassificationTable) -> Self {
        Self { table }
    }

    /// Classify a merged list of report fields.
    ///
    /// A D5-family field is recognized by its first value token, a D7-family
    /// field by its first three tokens concatenated; the remaining values are
    /// the per-hour series. Fields matching neither pattern are dropped, and
    /// a later field for an already seen code replaces the earlier one.
    pub fn classify(&self, fields: &[KontaktregisterField]) -> Result<ClassifiedMeasurements> {
        let mut measurements = HashMap::new();

        for field in fields {
            if let Some(statistic) = self.single_token_match(field) {
                measurements.insert(statistic, parse_series(&field.values[1..])?);
            } else if let Some(statistic) = self.triple_token_match(field) {
                measurements.insert(statistic, parse_series(&field.values[3..])?);
            }
        }

        Ok(measurements)
    }

    fn single_token_match(&self, field: &KontaktregisterField) -> Option<Statistic> {
        self.table.find(field.values.first()?.value.as_str())
    }

    fn triple_token_match(&self, field: &KontaktregisterField) -> Option<Statistic> {
        // three identifier tokens plus at least one data cell
        if field.values.len() < 4 {
            return None;
        }
        let key: String = field.values[..3].iter().map(|v| v.value.as_str()).collect();
        self.table.find(&key)
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new(ClassificationTable::standard())
    }
}

fn parse_series(values: &[KontaktregisterValue]) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|v| {
            v.value
                .parse::<i64>()
                .map_err(|source| TransferError::InvalidFieldValue {
                    value: v.value.clone(),
                    source,
                })
        })
        .collect()
}
