//! Sample month of grocery transactions (June 2025)

use chrono::{NaiveDate, NaiveTime};

use super::Transaction;

/// Thirty transactions, one per day of June 2025, in id order
#[rustfmt::skip]
pub fn monthly_transactions() -> Vec<Transaction> {
    vec![
        tx("TXN-0001", 1, (10, 15), &[("milk", 2), ("bread", 1)], "Cash", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0002", 2, (11, 40), &[("yogurt", 3)], "Credit Card", "Online", "Completed", "New", "Dairy"),
        tx("TXN-0003", 3, (9, 5), &[("bread", 1), ("egg", 6), ("butter", 1)], "Debit Card", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0004", 4, (14, 30), &[("chocolate", 2)], "Mobile Payment", "Online", "Pending", "New", "Pantry"),
        tx("TXN-0005", 5, (16, 10), &[("butter", 1), ("milk", 1), ("yogurt", 1)], "Cash", "In-Store", "Completed", "Regular", "Dairy"),
        tx("TXN-0006", 6, (10, 25), &[("rice", 2)], "Credit Card", "Online", "Returned", "New", "Pantry"),
        tx("TXN-0007", 7, (15, 45), &[("bread", 1), ("butter", 1)], "Cash", "In-Store", "Completed", "Regular", "Bakery"),
        tx("TXN-0008", 8, (13, 5), &[("egg", 12), ("milk", 1)], "Mobile Payment", "Online", "Completed", "New", "Mixed"),
        tx("TXN-0009", 9, (10, 50), &[("yogurt", 2), ("chocolate", 1)], "Credit Card", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0010", 10, (13, 35), &[("rice", 1), ("egg", 6)], "Debit Card", "Online", "Pending", "New", "Pantry"),
        tx("TXN-0011", 11, (12, 20), &[("bread", 1), ("milk", 1)], "Cash", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0012", 12, (11, 0), &[("yogurt", 2)], "Credit Card", "Online", "Returned", "New", "Dairy"),
        tx("TXN-0013", 13, (9, 30), &[("egg", 6)], "Debit Card", "In-Store", "Completed", "Regular", "Pantry"),
        tx("TXN-0014", 14, (15, 15), &[("butter", 2), ("chocolate", 1)], "Mobile Payment", "Online", "Completed", "New", "Mixed"),
        tx("TXN-0015", 15, (17, 50), &[("rice", 1), ("milk", 2)], "Cash", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0016", 16, (10, 5), &[("bread", 2)], "Credit Card", "Online", "Completed", "New", "Bakery"),
        tx("TXN-0017", 17, (14, 45), &[("yogurt", 1), ("milk", 1)], "Debit Card", "In-Store", "Pending", "Regular", "Dairy"),
        tx("TXN-0018", 18, (13, 10), &[("butter", 1), ("chocolate", 2)], "Mobile Payment", "Online", "Completed", "New", "Mixed"),
        tx("TXN-0019", 19, (16, 0), &[("egg", 12)], "Cash", "In-Store", "Completed", "Regular", "Pantry"),
        tx("TXN-0020", 20, (11, 25), &[("milk", 1), ("rice", 1)], "Credit Card", "Online", "Returned", "New", "Mixed"),
        tx("TXN-0021", 21, (9, 45), &[("bread", 1), ("butter", 1)], "Debit Card", "In-Store", "Completed", "Regular", "Bakery"),
        tx("TXN-0022", 22, (14, 10), &[("chocolate", 3)], "Mobile Payment", "Online", "Completed", "New", "Pantry"),
        tx("TXN-0023", 23, (12, 35), &[("yogurt", 2), ("egg", 6)], "Cash", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0024", 24, (10, 15), &[("milk", 2)], "Credit Card", "Online", "Completed", "New", "Dairy"),
        tx("TXN-0025", 25, (11, 50), &[("rice", 1), ("chocolate", 1)], "Debit Card", "In-Store", "Pending", "Regular", "Mixed"),
        tx("TXN-0026", 26, (13, 5), &[("bread", 1), ("milk", 1)], "Mobile Payment", "Online", "Completed", "New", "Mixed"),
        tx("TXN-0027", 27, (14, 20), &[("egg", 12), ("butter", 1)], "Cash", "In-Store", "Completed", "Regular", "Mixed"),
        tx("TXN-0028", 28, (16, 40), &[("yogurt", 1)], "Credit Card", "Online", "Returned", "New", "Dairy"),
        tx("TXN-0029", 29, (15, 30), &[("bread", 1), ("chocolate", 1)], "Debit Card", "In-Store", "Completed", "Regular", "Bakery"),
        tx("TXN-0030", 30, (17, 55), &[("milk", 2), ("egg", 6)], "Mobile Payment", "Online", "Completed", "New", "Mixed"),    ]
}

#[allow(clippy::too_many_arguments)]
fn tx(
    id: &str,
    day: u32,
    (hour, minute): (u32, u32),
    items: &[(&str, u32)],
    payment_method: &str,
    transaction_type: &str,
    transaction_status: &str,
    customer_type: &str,
    store_section: &str,
) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2025, 6, day).expect("fixture day within June");
    let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("fixture time within a day");

    items
        .iter()
        .fold(Transaction::builder(id, date, time), |builder, &(name, quantity)| {
            builder.item(name, quantity)
        })
        .payment_method(payment_method)
        .transaction_type(transaction_type)
        .transaction_status(transaction_status)
        .customer_type(customer_type)
        .store_section(store_section)
        .build()
}
