//! Shared ledgers for unit tests.

use chrono::NaiveDate;
use tally_core::{Account, Close, Entry, Open, Posting, Transaction};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn account(name: &str) -> Account {
    Account::new(name).unwrap()
}

pub fn open(d: NaiveDate, name: &str) -> Entry {
    Entry::Open(Open {
        date: d,
        account: account(name),
        currencies: Vec::new(),
    })
}

pub fn close(d: NaiveDate, name: &str) -> Entry {
    Entry::Close(Close {
        date: d,
        account: account(name),
    })
}

pub fn txn(
    d: NaiveDate,
    payee: Option<&str>,
    tags: &[&str],
    links: &[&str],
    accounts: &[&str],
) -> Entry {
    Entry::Transaction(Transaction {
        date: d,
        flag: '*',
        payee: payee.map(str::to_string),
        narration: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        links: links.iter().map(|l| l.to_string()).collect(),
        postings: accounts
            .iter()
            .map(|a| Posting { account: account(a) })
            .collect(),
    })
}

/// Five accounts opened on 2012-02-01, three transactions, two closes on
/// 2014-02-01.
pub fn sample_ledger() -> Vec<Entry> {
    let opened = date(2012, 2, 1);
    let closed = date(2014, 2, 1);
    vec![
        open(opened, "Assets:US:Cash"),
        open(opened, "Assets:US:Credit-Card"),
        open(opened, "Expenses:Grocery"),
        open(opened, "Expenses:Coffee"),
        open(opened, "Expenses:Restaurant"),
        txn(
            date(2012, 5, 18),
            None,
            &["dinner"],
            &[],
            &["Expenses:Restaurant", "Expenses:Grocery", "Assets:US:Cash"],
        ),
        txn(
            date(2013, 6, 20),
            Some("Whole Foods Market"),
            &["books", "dinner"],
            &["ee89ada94a39"],
            &["Expenses:Restaurant", "Assets:US:Credit-Card"],
        ),
        txn(
            date(2013, 6, 22),
            Some("La Colombe"),
            &[],
            &["ee89ada94a39"],
            &["Expenses:Coffee", "Assets:US:Cash"],
        ),
        close(closed, "Assets:US:Cash"),
        close(closed, "Assets:US:Credit-Card"),
    ]
}

pub const SAMPLE_ACCOUNTS: [&str; 5] = [
    "Assets:US:Cash",
    "Assets:US:Credit-Card",
    "Expenses:Grocery",
    "Expenses:Coffee",
    "Expenses:Restaurant",
];

const ACCOUNT_POOL: [&str; 7] = [
    "Assets:US:Cash",
    "Assets:US:Credit-Card",
    "Assets:CA:Checking",
    "Expenses:Grocery",
    "Expenses:Coffee",
    "Income:Salary",
    "Equity",
];
const PAYEE_POOL: [&str; 4] = ["La Colombe", "Whole Foods Market", "", "Employer"];
const TAG_POOL: [&str; 4] = ["books", "dinner", "trip", "work"];

/// Arbitrary date-sorted ledgers mixing opens, closes and transactions.
pub fn arb_ledger() -> impl proptest::strategy::Strategy<Value = Vec<Entry>> {
    use proptest::prelude::*;

    let entry = (
        0i64..2_000,
        0u8..3,
        prop::collection::vec(0..ACCOUNT_POOL.len(), 1..4),
        prop::option::of(0..PAYEE_POOL.len()),
        prop::collection::vec(0..TAG_POOL.len(), 0..3),
    );

    prop::collection::vec(entry, 0..40).prop_map(|mut specs| {
        specs.sort_by_key(|spec| spec.0);
        let base = date(2010, 1, 1);
        specs
            .into_iter()
            .map(|(offset, kind, accounts, payee, tags)| {
                let d = base + chrono::Duration::days(offset);
                let first = ACCOUNT_POOL[accounts[0]];
                match kind {
                    0 => open(d, first),
                    1 => close(d, first),
                    _ => {
                        let names: Vec<&str> = accounts.iter().map(|i| ACCOUNT_POOL[*i]).collect();
                        let tags: Vec<&str> = tags.iter().map(|i| TAG_POOL[*i]).collect();
                        txn(d, payee.map(|i| PAYEE_POOL[i]), &tags, &[], &names)
                    }
                }
            })
            .collect()
    })
}
