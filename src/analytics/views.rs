//! The ten transaction views
//!
//! Hour-keyed views list hours in ascending order. Every other view lists its
//! groups in the order they first occur in the transaction sequence.

use log::debug;

use crate::dataset::{Item, Transaction};
use crate::groupby::reducers::{
    average_quantities, count, distinct_item_names, round_half_up, sum_item_quantity,
    sum_quantities,
};
use crate::groupby::{aggregate, KeyOrder};
use crate::series::ChartSeries;
use crate::temporal::{hour_interval_label, week_of_month_label};

/// Analytic view over a month of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    ItemsSoldByHour,
    TransactionsByHour,
    AvgItemsByHour,
    DistinctItemsByHour,
    TransactionsPerWeek,
    ItemsSoldPerWeek,
    TransactionsByPaymentMethod,
    TransactionStatusDistribution,
    TotalQuantityPerItem,
    ItemsSoldByStoreSection,
}

/// Family a view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCategory {
    TimeBased,
    WeekBased,
    Categorical,
    ItemLevel,
}

impl ViewCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            ViewCategory::TimeBased => "Time-Based Analytics",
            ViewCategory::WeekBased => "Week-Based Analytics",
            ViewCategory::Categorical => "Categorical Analytics",
            ViewCategory::ItemLevel => "Item-Level Analytics",
        }
    }
}

impl View {
    /// All views in display order
    pub const ALL: [View; 10] = [
        View::ItemsSoldByHour,
        View::TransactionsByHour,
        View::AvgItemsByHour,
        View::DistinctItemsByHour,
        View::TransactionsPerWeek,
        View::ItemsSoldPerWeek,
        View::TransactionsByPaymentMethod,
        View::TransactionStatusDistribution,
        View::TotalQuantityPerItem,
        View::ItemsSoldByStoreSection,
    ];

    /// Short kebab-case identifier
    pub fn name(&self) -> &'static str {
        match self {
            View::ItemsSoldByHour => "items-sold-by-hour",
            View::TransactionsByHour => "transactions-by-hour",
            View::AvgItemsByHour => "avg-items-by-hour",
            View::DistinctItemsByHour => "distinct-items-by-hour",
            View::TransactionsPerWeek => "transactions-per-week",
            View::ItemsSoldPerWeek => "items-sold-per-week",
            View::TransactionsByPaymentMethod => "transactions-by-payment-method",
            View::TransactionStatusDistribution => "transaction-status-distribution",
            View::TotalQuantityPerItem => "total-quantity-per-item",
            View::ItemsSoldByStoreSection => "items-sold-by-store-section",
        }
    }

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            View::ItemsSoldByHour => "Total Items Sold by Hourly Interval",
            View::TransactionsByHour => "Total Transactions Count by Hour",
            View::AvgItemsByHour => "Avg. Items per Transaction by Hour",
            View::DistinctItemsByHour => "Distinct Items Sold by Hour",
            View::TransactionsPerWeek => "Total Transactions Per Week",
            View::ItemsSoldPerWeek => "Total Items Sold per Week",
            View::TransactionsByPaymentMethod => "Transactions by Payment Method",
            View::TransactionStatusDistribution => "Transaction Status Distribution",
            View::TotalQuantityPerItem => "Total Quantity Sold per Item",
            View::ItemsSoldByStoreSection => "Items Sold by Store Section",
        }
    }

    pub fn category(&self) -> ViewCategory {
        match self {
            View::ItemsSoldByHour
            | View::TransactionsByHour
            | View::AvgItemsByHour
            | View::DistinctItemsByHour => ViewCategory::TimeBased,
            View::TransactionsPerWeek | View::ItemsSoldPerWeek => ViewCategory::WeekBased,
            View::TransactionsByPaymentMethod | View::TransactionStatusDistribution => {
                ViewCategory::Categorical
            }
            View::TotalQuantityPerItem | View::ItemsSoldByStoreSection => ViewCategory::ItemLevel,
        }
    }

    /// Compute this view over `transactions`
    pub fn compute(&self, transactions: &[Transaction]) -> ChartSeries {
        let series = match self {
            View::ItemsSoldByHour => items_sold_by_hour(transactions),
            View::TransactionsByHour => transactions_by_hour(transactions),
            View::AvgItemsByHour => avg_items_by_hour(transactions),
            View::DistinctItemsByHour => distinct_items_by_hour(transactions),
            View::TransactionsPerWeek => transactions_per_week(transactions),
            View::ItemsSoldPerWeek => items_sold_per_week(transactions),
            View::TransactionsByPaymentMethod => transactions_by_payment_method(transactions),
            View::TransactionStatusDistribution => transaction_status_distribution(transactions),
            View::TotalQuantityPerItem => total_quantity_per_item(transactions),
            View::ItemsSoldByStoreSection => items_sold_by_store_section(transactions),
        };
        debug!("view {}: {} groups", self.name(), series.len());
        series
    }
}

/// Every view in display order
pub fn all_series(transactions: &[Transaction]) -> Vec<ChartSeries> {
    View::ALL
        .iter()
        .map(|view| view.compute(transactions))
        .collect()
}

fn hour_label(hour: &u32) -> String {
    hour_interval_label(*hour)
}

fn text_label(key: &&str) -> String {
    key.to_string()
}

fn as_value(value: &i64) -> i64 {
    *value
}

// ============================================================================
// Time-based
// ============================================================================

pub fn items_sold_by_hour(transactions: &[Transaction]) -> ChartSeries {
    aggregate(transactions, Transaction::hour, sum_quantities, KeyOrder::Sorted).to_series(
        View::ItemsSoldByHour.title(),
        hour_label,
        as_value,
    )
}

pub fn transactions_by_hour(transactions: &[Transaction]) -> ChartSeries {
    aggregate(transactions, Transaction::hour, count::<Transaction>, KeyOrder::Sorted).to_series(
        View::TransactionsByHour.title(),
        hour_label,
        as_value,
    )
}

/// Averages are rounded half-up for display
pub fn avg_items_by_hour(transactions: &[Transaction]) -> ChartSeries {
    aggregate(
        transactions,
        Transaction::hour,
        average_quantities,
        KeyOrder::Sorted,
    )
    .to_series(View::AvgItemsByHour.title(), hour_label, |&avg| {
        round_half_up(avg)
    })
}

pub fn distinct_items_by_hour(transactions: &[Transaction]) -> ChartSeries {
    aggregate(
        transactions,
        Transaction::hour,
        distinct_item_names,
        KeyOrder::Sorted,
    )
    .to_series(View::DistinctItemsByHour.title(), hour_label, as_value)
}

// ============================================================================
// Week-based
// ============================================================================

fn week_key(tx: &Transaction) -> String {
    week_of_month_label(&tx.date())
}

pub fn transactions_per_week(transactions: &[Transaction]) -> ChartSeries {
    aggregate(transactions, week_key, count::<Transaction>, KeyOrder::FirstSeen).to_series(
        View::TransactionsPerWeek.title(),
        String::clone,
        as_value,
    )
}

pub fn items_sold_per_week(transactions: &[Transaction]) -> ChartSeries {
    aggregate(transactions, week_key, sum_quantities, KeyOrder::FirstSeen).to_series(
        View::ItemsSoldPerWeek.title(),
        String::clone,
        as_value,
    )
}

// ============================================================================
// Categorical
// ============================================================================

pub fn transactions_by_payment_method(transactions: &[Transaction]) -> ChartSeries {
    aggregate(
        transactions,
        Transaction::payment_method,
        count::<Transaction>,
        KeyOrder::FirstSeen,
    )
    .to_series(
        View::TransactionsByPaymentMethod.title(),
        text_label,
        as_value,
    )
}

pub fn transaction_status_distribution(transactions: &[Transaction]) -> ChartSeries {
    aggregate(
        transactions,
        Transaction::transaction_status,
        count::<Transaction>,
        KeyOrder::FirstSeen,
    )
    .to_series(
        View::TransactionStatusDistribution.title(),
        text_label,
        as_value,
    )
}

// ============================================================================
// Item-level
// ============================================================================

/// Groups individual line items by name rather than whole transactions
pub fn total_quantity_per_item(transactions: &[Transaction]) -> ChartSeries {
    let items: Vec<Item> = transactions
        .iter()
        .flat_map(|tx| tx.items().iter().cloned())
        .collect();

    aggregate(&items, Item::name, sum_item_quantity, KeyOrder::FirstSeen).to_series(
        View::TotalQuantityPerItem.title(),
        text_label,
        as_value,
    )
}

pub fn items_sold_by_store_section(transactions: &[Transaction]) -> ChartSeries {
    aggregate(
        transactions,
        Transaction::store_section,
        sum_quantities,
        KeyOrder::FirstSeen,
    )
    .to_series(
        View::ItemsSoldByStoreSection.title(),
        text_label,
        as_value,
    )
}
