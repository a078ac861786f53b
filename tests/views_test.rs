use retail_charts::analytics::{self, View, ViewCategory};
use retail_charts::{monthly_transactions, ChartSeries, Transaction};

fn pairs(series: &ChartSeries) -> Vec<(&str, i64)> {
    series.iter().collect()
}

fn total_quantity(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(Transaction::total_quantity).sum()
}

#[test]
fn test_items_sold_by_hour() {
    let transactions = monthly_transactions();
    let series = analytics::items_sold_by_hour(&transactions);

    assert_eq!(series.title(), "Total Items Sold by Hourly Interval");
    assert_eq!(
        pairs(&series),
        vec![
            ("09:00–10:00", 16),
            ("10:00–11:00", 12),
            ("11:00–12:00", 9),
            ("12:00–13:00", 10),
            ("13:00–14:00", 25),
            ("14:00–15:00", 20),
            ("15:00–16:00", 7),
            ("16:00–17:00", 16),
            ("17:00–18:00", 11),
        ]
    );
}

#[test]
fn test_hour_ten_by_direct_computation() {
    // TXN-0001 milk 2 + bread 1, TXN-0006 rice 2, TXN-0009 yogurt 2 + chocolate 1,
    // TXN-0016 bread 2, TXN-0024 milk 2
    let transactions = monthly_transactions();
    let expected: i64 = transactions
        .iter()
        .filter(|tx| tx.hour() == 10)
        .map(Transaction::total_quantity)
        .sum();
    assert_eq!(expected, 12);

    let series = View::ItemsSoldByHour.compute(&transactions);
    assert_eq!(series.get("10:00–11:00"), Some(expected));
}

#[test]
fn test_transactions_by_hour_counts_partition() {
    let transactions = monthly_transactions();
    let series = analytics::transactions_by_hour(&transactions);

    assert_eq!(series.values(), &[3, 5, 4, 2, 4, 4, 3, 3, 2]);
    assert_eq!(series.total(), transactions.len() as i64);
}

#[test]
fn test_avg_items_by_hour_rounds_half_up() {
    let transactions = monthly_transactions();
    let series = analytics::avg_items_by_hour(&transactions);

    // 17:00 averages (3 + 8) / 2 = 5.5
    assert_eq!(series.get("17:00–18:00"), Some(6));
    // 10:00 averages 12 / 5 = 2.4
    assert_eq!(series.get("10:00–11:00"), Some(2));
    assert_eq!(series.values(), &[5, 2, 2, 5, 6, 5, 2, 5, 6]);
}

#[test]
fn test_avg_matches_sum_over_count() {
    let transactions = monthly_transactions();
    let sums = analytics::items_sold_by_hour(&transactions);
    let counts = analytics::transactions_by_hour(&transactions);
    let averages = analytics::avg_items_by_hour(&transactions);

    for ((sum, count), avg) in sums
        .values()
        .iter()
        .zip(counts.values())
        .zip(averages.values())
    {
        let expected = (*sum as f64 / *count as f64 + 0.5).floor() as i64;
        assert_eq!(*avg, expected);
    }
}

#[test]
fn test_distinct_items_by_hour_bounds() {
    let transactions = monthly_transactions();
    let series = analytics::distinct_items_by_hour(&transactions);
    assert_eq!(series.values(), &[3, 5, 4, 4, 6, 5, 3, 4, 3]);

    for (label, distinct) in series.iter() {
        let hour: u32 = label[..2].parse().unwrap();
        let occurrences = transactions
            .iter()
            .filter(|tx| tx.hour() == hour)
            .map(|tx| tx.items().len() as i64)
            .sum::<i64>();
        assert!(distinct >= 1);
        assert!(distinct <= occurrences);
    }
}

#[test]
fn test_week_views() {
    let transactions = monthly_transactions();

    let counts = analytics::transactions_per_week(&transactions);
    assert_eq!(
        pairs(&counts),
        vec![("Week 1", 8), ("Week 2", 8), ("Week 3", 8), ("Week 4", 6)]
    );

    let items = analytics::items_sold_per_week(&transactions);
    assert_eq!(
        pairs(&items),
        vec![("Week 1", 36), ("Week 2", 28), ("Week 3", 34), ("Week 4", 28)]
    );
    assert_eq!(items.total(), total_quantity(&transactions));
}

#[test]
fn test_categorical_views_first_seen_order() {
    let transactions = monthly_transactions();

    let payment = analytics::transactions_by_payment_method(&transactions);
    assert_eq!(
        pairs(&payment),
        vec![
            ("Cash", 8),
            ("Credit Card", 8),
            ("Debit Card", 7),
            ("Mobile Payment", 7)
        ]
    );

    let status = analytics::transaction_status_distribution(&transactions);
    assert_eq!(
        pairs(&status),
        vec![("Completed", 22), ("Pending", 4), ("Returned", 4)]
    );
    assert_eq!(status.total(), 30);
}

#[test]
fn test_item_level_views() {
    let transactions = monthly_transactions();

    let per_item = analytics::total_quantity_per_item(&transactions);
    assert_eq!(
        pairs(&per_item),
        vec![
            ("milk", 14),
            ("bread", 9),
            ("yogurt", 12),
            ("egg", 66),
            ("butter", 8),
            ("chocolate", 11),
            ("rice", 6),
        ]
    );

    let per_section = analytics::items_sold_by_store_section(&transactions);
    assert_eq!(
        pairs(&per_section),
        vec![("Mixed", 73), ("Dairy", 13), ("Pantry", 32), ("Bakery", 8)]
    );

    assert_eq!(per_item.total(), 126);
    assert_eq!(per_section.total(), total_quantity(&transactions));
}

#[test]
fn test_sum_views_partition_total_quantity() {
    let transactions = monthly_transactions();
    let total = total_quantity(&transactions);

    for view in [
        View::ItemsSoldByHour,
        View::ItemsSoldPerWeek,
        View::TotalQuantityPerItem,
        View::ItemsSoldByStoreSection,
    ] {
        assert_eq!(view.compute(&transactions).total(), total, "{}", view.name());
    }
}

#[test]
fn test_all_series_order_and_titles() {
    let transactions = monthly_transactions();
    let series = analytics::all_series(&transactions);

    assert_eq!(series.len(), 10);
    for (view, s) in View::ALL.iter().zip(&series) {
        assert_eq!(s.title(), view.title());
        assert!(!s.is_empty());
    }
    assert_eq!(View::ALL[0].category(), ViewCategory::TimeBased);
    assert_eq!(View::ALL[9].category().heading(), "Item-Level Analytics");
}

#[test]
fn test_views_over_no_transactions() {
    let series = analytics::all_series(&[]);
    assert!(series.iter().all(|s| s.is_empty()));
}
