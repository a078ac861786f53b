//! Reduction functions over groups of records
//!
//! Every reducer is total: an empty group yields zero instead of failing.

use std::collections::HashSet;

use crate::dataset::{Item, Transaction};

/// Number of records in the group
pub fn count<T>(group: &[&T]) -> i64 {
    group.len() as i64
}

/// Sum of item quantities over every transaction in the group
pub fn sum_quantities(group: &[&Transaction]) -> i64 {
    group.iter().map(|tx| tx.total_quantity()).sum()
}

/// Mean item quantity per transaction, 0.0 for an empty group
pub fn average_quantities(group: &[&Transaction]) -> f64 {
    if group.is_empty() {
        return 0.0;
    }
    sum_quantities(group) as f64 / group.len() as f64
}

/// Number of distinct item names across the group
pub fn distinct_item_names(group: &[&Transaction]) -> i64 {
    group
        .iter()
        .flat_map(|tx| tx.items())
        .map(Item::name)
        .collect::<HashSet<_>>()
        .len() as i64
}

/// Sum of quantities over a group of line items
pub fn sum_item_quantity(group: &[&Item]) -> i64 {
    group.iter().map(|item| i64::from(item.quantity())).sum()
}

/// Round to the nearest integer, halves rounding up
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
