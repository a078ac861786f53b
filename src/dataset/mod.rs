//! Retail transaction records
//!
//! `Item` and `Transaction` are immutable values: fields are private and only
//! readable through accessors. The `fixture` submodule supplies the sample
//! month of grocery transactions used by the binary.

mod fixture;

use chrono::{NaiveDate, NaiveTime, Timelike};

pub use self::fixture::monthly_transactions;

/// A line item in a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A single retail transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    time: NaiveTime,
    items: Vec<Item>,
    payment_method: String,
    transaction_type: String,
    transaction_status: String,
    customer_type: String,
    store_section: String,
}

impl Transaction {
    /// Start building a transaction with the given id, date and time
    pub fn builder(id: impl Into<String>, date: NaiveDate, time: NaiveTime) -> TransactionBuilder {
        TransactionBuilder {
            id: id.into(),
            date,
            time,
            items: Vec::new(),
            payment_method: String::new(),
            transaction_type: String::new(),
            transaction_status: String::new(),
            customer_type: String::new(),
            store_section: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Hour of day (0-23) the transaction took place in
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    pub fn transaction_status(&self) -> &str {
        &self.transaction_status
    }

    pub fn customer_type(&self) -> &str {
        &self.customer_type
    }

    pub fn store_section(&self) -> &str {
        &self.store_section
    }

    /// Sum of item quantities, 0 for a transaction without items
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }
}

/// Builder for [`Transaction`]
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    id: String,
    date: NaiveDate,
    time: NaiveTime,
    items: Vec<Item>,
    payment_method: String,
    transaction_type: String,
    transaction_status: String,
    customer_type: String,
    store_section: String,
}

impl TransactionBuilder {
    /// Append an item
    pub fn item(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.items.push(Item::new(name, quantity));
        self
    }

    pub fn payment_method(mut self, value: impl Into<String>) -> Self {
        self.payment_method = value.into();
        self
    }

    pub fn transaction_type(mut self, value: impl Into<String>) -> Self {
        self.transaction_type = value.into();
        self
    }

    pub fn transaction_status(mut self, value: impl Into<String>) -> Self {
        self.transaction_status = value.into();
        self
    }

    pub fn customer_type(mut self, value: impl Into<String>) -> Self {
        self.customer_type = value.into();
        self
    }

    pub fn store_section(mut self, value: impl Into<String>) -> Self {
        self.store_section = value.into();
        self
    }

    pub fn build(self) -> Transaction {
        Transaction {
            id: self.id,
            date: self.date,
            time: self.time,
            items: self.items,
            payment_method: self.payment_method,
            transaction_type: self.transaction_type,
            transaction_status: self.transaction_status,
            customer_type: self.customer_type,
            store_section: self.store_section,
        }
    }
}
