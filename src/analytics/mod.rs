//! Transaction analytics
//!
//! Each [`View`] groups a month of transactions by one derived key and reduces
//! every group to a single number:
//!
//! - Time-based: items, transactions, average basket size and distinct items per hour
//! - Week-based: transactions and items per week of month
//! - Categorical: transactions per payment method and per status
//! - Item-level: quantity per item and items per store section
//!
//! # Example
//!
//! ```
//! use retail_charts::analytics::View;
//! use retail_charts::dataset::monthly_transactions;
//!
//! let transactions = monthly_transactions();
//! let series = View::TransactionsByPaymentMethod.compute(&transactions);
//! assert_eq!(series.get("Cash"), Some(8));
//! ```

mod views;

pub use views::*;
