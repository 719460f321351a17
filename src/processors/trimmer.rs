use crate::models::KontaktregisterField;

/// Drop the trailing reporting periods that every field reports as zero.
///
/// The registry pads reports with zero columns for hours not yet reported;
/// a tail shared by all fields would otherwise turn into spurious zero-valued
/// points downstream. Columns are dropped from the end while every field's
/// last value parses as integer zero; a non-zero or non-numeric last value
/// halts trimming, so identifier tokens are never consumed.
///
/// Returns fresh, shorter fields; the input is left untouched.
pub fn remove_trailing_zeroes(fields: &[KontaktregisterField]) -> Vec<KontaktregisterField> {
    let trim = shared_zero_tail(fields);
    fields
        .iter()
        .map(|f| f.truncated(f.values.len() - trim))
        .collect()
}

fn shared_zero_tail(fields: &[KontaktregisterField]) -> usize {
    if fields.is_empty() {
        return 0;
    }
    let mut trim = 0;
    while fields.iter().all(|f| {
        f.values
            .len()
            .checked_sub(trim + 1)
            .and_then(|i| f.values.get(i))
            .is_some_and(|v| is_zero(&v.value))
    }) {
        trim += 1;
    }
    trim
}

fn is_zero(value: &str) -> bool {
    value.parse::<i64>().map_or(false, |n| n == 0)
}
