//! Order-preserving accumulation for ranked aggregations.

use std::collections::HashMap;
use std::ops::AddAssign;

/// Accumulate totals per key, preserving first-seen key order.
///
/// Follow-up stable descending sorts then break ties by encounter order,
/// which is what the ranked insight lists promise.
pub(crate) fn accumulate_in_order<T>(
    entries: impl IntoIterator<Item = (String, T)>,
) -> Vec<(String, T)>
where
    T: AddAssign,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, T)> = Vec::new();

    for (key, value) in entries {
        match positions.get(&key) {
            Some(&at) => totals[at].1 += value,
            None => {
                positions.insert(key.clone(), totals.len());
                totals.push((key, value));
            }
        }
    }

    totals
}
